use serde::{Deserialize, Serialize};

use crate::model::{order::OrderDto, restaurant::RestaurantDto, user::UserDto};

#[derive(Serialize)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize)]
pub struct AdminRestaurantsDto {
    pub restaurants: Vec<RestaurantDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize)]
pub struct SetUserStatusDto {
    pub is_active: bool,
}

#[derive(Deserialize)]
pub struct SetUserRoleDto {
    pub role: String,
}
