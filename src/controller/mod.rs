pub mod admin;
pub mod auth;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod upload;
pub mod user;
