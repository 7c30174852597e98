//! SeaORM entity models for the mealdrop schema.
//!
//! One module per table, plus the closed `Role` and `OrderStatus` enums that
//! back the `user.role` and `order.status` columns. Domain logic lives in the
//! server crate; this crate only describes storage.

pub mod address;
pub mod enums;
pub mod favorite;
pub mod menu_category;
pub mod menu_item;
pub mod menu_item_customization;
pub mod opening_hour;
pub mod order;
pub mod order_item;
pub mod order_tracking;
pub mod prelude;
pub mod restaurant;
pub mod restaurant_image;
pub mod review;
pub mod user;
