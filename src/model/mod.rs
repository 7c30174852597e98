//! DTOs and operation parameter types.
//!
//! DTO structs (serde) define the JSON wire format; `*Params` structs are what
//! the service and data layers consume. Controllers convert between the two so
//! the layers below never see raw request payloads.

pub mod admin;
pub mod api;
pub mod auth;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod user;
