pub mod code;

use sea_orm::DatabaseConnection;

use crate::{
    data::{order::OrderRepository, restaurant::RestaurantRepository, user::UserRepository},
    error::AppError,
    model::{
        admin::{AdminRestaurantsDto, PaginatedOrdersDto, PaginatedUsersDto},
        api::{total_pages, PaginationParams},
        order::OrderDto,
        restaurant::RestaurantDto,
        user::UserDto,
    },
};

/// Platform-wide listings and user moderation. Every operation here sits
/// behind the admin gate in the router.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_users(&self, params: &PaginationParams) -> Result<PaginatedUsersDto, AppError> {
        let repository = UserRepository::new(self.db);
        let (users, total) = repository
            .get_all_paginated(params.page, params.entries)
            .await?;

        Ok(PaginatedUsersDto {
            users: users.into_iter().map(UserDto::from_entity).collect(),
            total,
            page: params.page,
            per_page: params.entries,
            total_pages: total_pages(total, params.entries),
        })
    }

    pub async fn list_orders(
        &self,
        params: &PaginationParams,
    ) -> Result<PaginatedOrdersDto, AppError> {
        let repository = OrderRepository::new(self.db);
        let (orders, total) = repository
            .get_all_paginated(params.page, params.entries)
            .await?;

        Ok(PaginatedOrdersDto {
            orders: orders.into_iter().map(OrderDto::from_entity).collect(),
            total,
            page: params.page,
            per_page: params.entries,
            total_pages: total_pages(total, params.entries),
        })
    }

    pub async fn list_restaurants(
        &self,
        params: &PaginationParams,
    ) -> Result<AdminRestaurantsDto, AppError> {
        let repository = RestaurantRepository::new(self.db);
        let (restaurants, total) = repository
            .get_all_paginated(params.page, params.entries)
            .await?;

        Ok(AdminRestaurantsDto {
            restaurants: restaurants.into_iter().map(RestaurantDto::from_entity).collect(),
            total,
            page: params.page,
            per_page: params.entries,
            total_pages: total_pages(total, params.entries),
        })
    }

    /// Enables or disables an account. Disabled users fail authorization on
    /// their next request even if they hold a valid token.
    pub async fn set_user_status(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<UserDto, AppError> {
        let updated = UserRepository::new(self.db)
            .set_active(user_id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(UserDto::from_entity(updated))
    }

    pub async fn set_user_role(&self, user_id: i32, role: &str) -> Result<UserDto, AppError> {
        let role = entity::enums::Role::parse(role)
            .ok_or_else(|| AppError::Validation(format!("Unknown role '{}'", role)))?;

        let updated = UserRepository::new(self.db)
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(UserDto::from_entity(updated))
    }
}
