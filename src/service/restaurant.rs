use sea_orm::DatabaseConnection;

use crate::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::{
        api::total_pages,
        restaurant::{
            AddImageDto, CreateRestaurantDto, CreateRestaurantParams, OpeningHourDto,
            OpeningHourInputDto, OpeningHourParams, PaginatedRestaurantsDto, RestaurantDto,
            RestaurantImageDto, RestaurantQuery, UpdateRestaurantDto, UpdateRestaurantParams,
        },
    },
};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: &RestaurantQuery) -> Result<PaginatedRestaurantsDto, AppError> {
        let repository = RestaurantRepository::new(self.db);
        let (restaurants, total) = repository.list(query).await?;

        Ok(PaginatedRestaurantsDto {
            restaurants: restaurants
                .into_iter()
                .map(RestaurantDto::from_entity)
                .collect(),
            total,
            page: query.page,
            per_page: query.entries,
            total_pages: total_pages(total, query.entries),
        })
    }

    pub async fn get(&self, id: i32) -> Result<RestaurantDto, AppError> {
        let repository = RestaurantRepository::new(self.db);
        let details = repository
            .get_with_details(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;

        Ok(RestaurantDto::with_details(
            details.restaurant,
            details.opening_hours,
            details.images,
        ))
    }

    pub async fn create(
        &self,
        owner_id: i32,
        data: CreateRestaurantDto,
    ) -> Result<RestaurantDto, AppError> {
        validate_name(&data.name)?;
        validate_fee(data.delivery_fee_cents)?;

        let repository = RestaurantRepository::new(self.db);
        let restaurant = repository
            .create(CreateRestaurantParams {
                owner_id,
                name: data.name,
                description: data.description,
                cuisine: data.cuisine,
                street: data.street,
                city: data.city,
                postal_code: data.postal_code,
                phone: data.phone,
                delivery_fee_cents: data.delivery_fee_cents,
            })
            .await?;

        tracing::info!(restaurant_id = restaurant.id, owner_id, "Created restaurant");

        Ok(RestaurantDto::from_entity(restaurant))
    }

    pub async fn update(
        &self,
        id: i32,
        data: UpdateRestaurantDto,
    ) -> Result<RestaurantDto, AppError> {
        if let Some(name) = &data.name {
            validate_name(name)?;
        }
        if let Some(fee) = data.delivery_fee_cents {
            validate_fee(fee)?;
        }

        let repository = RestaurantRepository::new(self.db);
        let restaurant = repository
            .update(UpdateRestaurantParams::from_dto(id, data))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;

        Ok(RestaurantDto::from_entity(restaurant))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repository = RestaurantRepository::new(self.db);
        if repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Restaurant {} not found", id)));
        }

        repository.delete(id).await?;
        tracing::info!(restaurant_id = id, "Deleted restaurant");

        Ok(())
    }

    /// Replaces the full weekly schedule in one call.
    pub async fn set_opening_hours(
        &self,
        restaurant_id: i32,
        hours: Vec<OpeningHourInputDto>,
    ) -> Result<Vec<OpeningHourDto>, AppError> {
        for hour in &hours {
            if !(0..7).contains(&hour.weekday) {
                return Err(AppError::Validation(format!(
                    "Weekday must be between 0 and 6, got {}",
                    hour.weekday
                )));
            }
        }

        let params = hours
            .into_iter()
            .map(|hour| OpeningHourParams {
                weekday: hour.weekday,
                opens_at: hour.opens_at,
                closes_at: hour.closes_at,
            })
            .collect();

        let repository = RestaurantRepository::new(self.db);
        let created = repository
            .replace_opening_hours(restaurant_id, params)
            .await?;

        Ok(created.into_iter().map(OpeningHourDto::from_entity).collect())
    }

    pub async fn add_image(
        &self,
        restaurant_id: i32,
        data: AddImageDto,
    ) -> Result<RestaurantImageDto, AppError> {
        if data.url.trim().is_empty() {
            return Err(AppError::Validation("Image URL must not be empty".to_string()));
        }

        let repository = RestaurantRepository::new(self.db);
        let image = repository
            .add_image(restaurant_id, data.url, data.position)
            .await?;

        Ok(RestaurantImageDto::from_entity(image))
    }

    pub async fn delete_image(&self, restaurant_id: i32, image_id: i32) -> Result<(), AppError> {
        let repository = RestaurantRepository::new(self.db);
        if !repository.delete_image(restaurant_id, image_id).await? {
            return Err(AppError::NotFound(format!(
                "Image {} not found for restaurant {}",
                image_id, restaurant_id
            )));
        }

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "Restaurant name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_fee(fee_cents: i64) -> Result<(), AppError> {
    if fee_cents < 0 {
        return Err(AppError::Validation(
            "Delivery fee must not be negative".to_string(),
        ));
    }
    Ok(())
}
