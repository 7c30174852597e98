//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Factories handle foreign
//! keys, so tests stay focused on the behavior under test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Defaults
//! let user = factory::create_user(&db).await?;
//!
//! // Customized
//! let owner = factory::user::UserFactory::new(&db)
//!     .role(Role::RestaurantOwner)
//!     .email("owner@example.com")
//!     .build()
//!     .await?;
//!
//! // Full order graph in one call
//! let (customer, owner, restaurant, item, order) =
//!     factory::helpers::create_order_with_dependencies(&db).await?;
//! ```

pub mod address;
pub mod helpers;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

pub use address::create_address;
pub use menu::{create_category, create_menu_item};
pub use order::create_order;
pub use restaurant::create_restaurant;
pub use user::{create_customer, create_owner, create_user};
