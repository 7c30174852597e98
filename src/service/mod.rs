//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They implement the business rules — credential checks, ownership,
//! the order status state machine, the delivered-order review gate — and
//! coordinate repository calls. Controllers hand them parameter models and
//! get domain/entity models back.

pub mod admin;
pub mod auth;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
