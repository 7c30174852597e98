//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each domain in the application. Repositories use SeaORM entity models internally and
//! accept parameter models to maintain separation between the data layer and business
//! logic layer. All database queries, inserts, updates, and deletes go through here.

pub mod address;
pub mod favorite;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod user;
