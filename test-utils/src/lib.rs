//! Shared testing utilities for the delivery backend.
//!
//! Provides a builder for in-memory SQLite test databases plus factories for
//! creating test entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Per-entity factories and dependency helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_core_tables().build().await?;
//!     let db = test.db.unwrap();
//!
//!     let user = test_utils::factory::create_user(&db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
