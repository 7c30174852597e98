use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::restaurant::{
    CreateRestaurantParams, OpeningHourParams, RestaurantQuery, UpdateRestaurantParams,
};

/// Restaurant row together with its opening hours and gallery images.
pub struct RestaurantWithDetails {
    pub restaurant: entity::restaurant::Model,
    pub opening_hours: Vec<entity::opening_hour::Model>,
    pub images: Vec<entity::restaurant_image::Model>,
}

pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateRestaurantParams,
    ) -> Result<entity::restaurant::Model, DbErr> {
        let now = Utc::now();
        entity::restaurant::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            cuisine: ActiveValue::Set(params.cuisine),
            street: ActiveValue::Set(params.street),
            city: ActiveValue::Set(params.city),
            postal_code: ActiveValue::Set(params.postal_code),
            phone: ActiveValue::Set(params.phone),
            is_open: ActiveValue::Set(true),
            delivery_fee_cents: ActiveValue::Set(params.delivery_fee_cents),
            rating: ActiveValue::Set(0.0),
            rating_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find_by_id(id).one(self.db).await
    }

    /// Fetches a restaurant with its opening hours and images.
    pub async fn get_with_details(&self, id: i32) -> Result<Option<RestaurantWithDetails>, DbErr> {
        let Some(restaurant) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let opening_hours = entity::prelude::OpeningHour::find()
            .filter(entity::opening_hour::Column::RestaurantId.eq(id))
            .order_by_asc(entity::opening_hour::Column::Weekday)
            .all(self.db)
            .await?;

        let images = entity::prelude::RestaurantImage::find()
            .filter(entity::restaurant_image::Column::RestaurantId.eq(id))
            .order_by_asc(entity::restaurant_image::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(RestaurantWithDetails {
            restaurant,
            opening_hours,
            images,
        }))
    }

    /// Public listing with optional cuisine/city/name filters, paginated.
    pub async fn list(
        &self,
        query: &RestaurantQuery,
    ) -> Result<(Vec<entity::restaurant::Model>, u64), DbErr> {
        let mut select = entity::prelude::Restaurant::find();

        if let Some(cuisine) = &query.cuisine {
            select = select.filter(entity::restaurant::Column::Cuisine.eq(cuisine.clone()));
        }
        if let Some(city) = &query.city {
            select = select.filter(entity::restaurant::Column::City.eq(city.clone()));
        }
        if let Some(search) = &query.search {
            select = select.filter(entity::restaurant::Column::Name.contains(search.clone()));
        }

        let paginator = select
            .order_by_asc(entity::restaurant::Column::Name)
            .paginate(self.db, query.entries);

        let total = paginator.num_items().await?;
        let restaurants = paginator.fetch_page(query.page).await?;

        Ok((restaurants, total))
    }

    /// Updates mutable fields, returning `None` when the restaurant is gone.
    pub async fn update(
        &self,
        params: UpdateRestaurantParams,
    ) -> Result<Option<entity::restaurant::Model>, DbErr> {
        let Some(restaurant) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::restaurant::ActiveModel = restaurant.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(cuisine) = params.cuisine {
            active.cuisine = ActiveValue::Set(cuisine);
        }
        if let Some(street) = params.street {
            active.street = ActiveValue::Set(street);
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(postal_code) = params.postal_code {
            active.postal_code = ActiveValue::Set(postal_code);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(is_open) = params.is_open {
            active.is_open = ActiveValue::Set(is_open);
        }
        if let Some(fee) = params.delivery_fee_cents {
            active.delivery_fee_cents = ActiveValue::Set(fee);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a restaurant and its dependent hours and images.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::OpeningHour::delete_many()
            .filter(entity::opening_hour::Column::RestaurantId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::RestaurantImage::delete_many()
            .filter(entity::restaurant_image::Column::RestaurantId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::Restaurant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the full opening-hours set for a restaurant.
    pub async fn replace_opening_hours(
        &self,
        restaurant_id: i32,
        hours: Vec<OpeningHourParams>,
    ) -> Result<Vec<entity::opening_hour::Model>, DbErr> {
        entity::prelude::OpeningHour::delete_many()
            .filter(entity::opening_hour::Column::RestaurantId.eq(restaurant_id))
            .exec(self.db)
            .await?;

        let mut created = Vec::with_capacity(hours.len());
        for hour in hours {
            let model = entity::opening_hour::ActiveModel {
                restaurant_id: ActiveValue::Set(restaurant_id),
                weekday: ActiveValue::Set(hour.weekday),
                opens_at: ActiveValue::Set(hour.opens_at),
                closes_at: ActiveValue::Set(hour.closes_at),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            created.push(model);
        }

        Ok(created)
    }

    pub async fn add_image(
        &self,
        restaurant_id: i32,
        url: String,
        position: i32,
    ) -> Result<entity::restaurant_image::Model, DbErr> {
        entity::restaurant_image::ActiveModel {
            restaurant_id: ActiveValue::Set(restaurant_id),
            url: ActiveValue::Set(url),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes an image belonging to the restaurant. Returns whether a row
    /// was removed.
    pub async fn delete_image(&self, restaurant_id: i32, image_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RestaurantImage::delete_many()
            .filter(entity::restaurant_image::Column::Id.eq(image_id))
            .filter(entity::restaurant_image::Column::RestaurantId.eq(restaurant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores the recomputed review aggregate.
    pub async fn update_rating(&self, id: i32, rating: f64, rating_count: i32) -> Result<(), DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::Unchanged(id),
            rating: ActiveValue::Set(rating),
            rating_count: ActiveValue::Set(rating_count),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// All restaurants, paginated, for the admin listing.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::restaurant::Model>, u64), DbErr> {
        let paginator = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let restaurants = paginator.fetch_page(page).await?;

        Ok((restaurants, total))
    }
}
