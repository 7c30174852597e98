//! Restaurant factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test restaurants.
///
/// Defaults: open, zero rating, a 250-cent delivery fee, and generated
/// name/city values.
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    cuisine: String,
    city: String,
    is_open: bool,
    delivery_fee_cents: i64,
}

impl<'a> RestaurantFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Restaurant {}", id),
            cuisine: "italian".to_string(),
            city: format!("City {}", id),
            is_open: true,
            delivery_fee_cents: 250,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn delivery_fee_cents(mut self, delivery_fee_cents: i64) -> Self {
        self.delivery_fee_cents = delivery_fee_cents;
        self
    }

    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        let now = Utc::now();
        entity::restaurant::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            cuisine: ActiveValue::Set(self.cuisine),
            street: ActiveValue::Set("1 Test Street".to_string()),
            city: ActiveValue::Set(self.city),
            postal_code: ActiveValue::Set("12345".to_string()),
            phone: ActiveValue::Set(None),
            is_open: ActiveValue::Set(self.is_open),
            delivery_fee_cents: ActiveValue::Set(self.delivery_fee_cents),
            rating: ActiveValue::Set(0.0),
            rating_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values for the given owner.
pub async fn create_restaurant(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db, owner_id).build().await
}
