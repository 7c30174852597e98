use sea_orm::DatabaseConnection;

use crate::{
    data::{address::AddressRepository, favorite::FavoriteRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::{
        restaurant::RestaurantDto,
        user::{AddressDto, CreateAddressDto, UpdateAddressDto},
    },
};

/// Customer-owned resources: delivery addresses and favorite restaurants.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_addresses(&self, user_id: i32) -> Result<Vec<AddressDto>, AppError> {
        let addresses = AddressRepository::new(self.db).get_by_user(user_id).await?;
        Ok(addresses.into_iter().map(AddressDto::from_entity).collect())
    }

    pub async fn create_address(
        &self,
        user_id: i32,
        data: CreateAddressDto,
    ) -> Result<AddressDto, AppError> {
        if data.street.trim().is_empty() || data.city.trim().is_empty() {
            return Err(AppError::Validation(
                "Street and city must not be empty".to_string(),
            ));
        }

        let address = AddressRepository::new(self.db).create(user_id, data).await?;
        Ok(AddressDto::from_entity(address))
    }

    pub async fn update_address(
        &self,
        user_id: i32,
        address_id: i32,
        data: UpdateAddressDto,
    ) -> Result<AddressDto, AppError> {
        let address = AddressRepository::new(self.db)
            .update(user_id, address_id, data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Address {} not found", address_id)))?;

        Ok(AddressDto::from_entity(address))
    }

    pub async fn delete_address(&self, user_id: i32, address_id: i32) -> Result<(), AppError> {
        if !AddressRepository::new(self.db).delete(user_id, address_id).await? {
            return Err(AppError::NotFound(format!(
                "Address {} not found",
                address_id
            )));
        }

        Ok(())
    }

    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<RestaurantDto>, AppError> {
        let restaurants = FavoriteRepository::new(self.db)
            .list_restaurants(user_id)
            .await?;

        Ok(restaurants.into_iter().map(RestaurantDto::from_entity).collect())
    }

    /// Marks a restaurant as favorite. Adding twice is a no-op.
    pub async fn add_favorite(&self, user_id: i32, restaurant_id: i32) -> Result<(), AppError> {
        if RestaurantRepository::new(self.db)
            .find_by_id(restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Restaurant {} not found",
                restaurant_id
            )));
        }

        FavoriteRepository::new(self.db).add(user_id, restaurant_id).await?;

        Ok(())
    }

    pub async fn remove_favorite(&self, user_id: i32, restaurant_id: i32) -> Result<(), AppError> {
        if !FavoriteRepository::new(self.db).remove(user_id, restaurant_id).await? {
            return Err(AppError::NotFound(format!(
                "Restaurant {} is not in favorites",
                restaurant_id
            )));
        }

        Ok(())
    }
}
