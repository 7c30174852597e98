use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct OpeningHourDto {
    pub weekday: i16,
    pub opens_at: String,
    pub closes_at: String,
}

impl OpeningHourDto {
    pub fn from_entity(hour: entity::opening_hour::Model) -> Self {
        Self {
            weekday: hour.weekday,
            opens_at: hour.opens_at,
            closes_at: hour.closes_at,
        }
    }
}

#[derive(Serialize)]
pub struct RestaurantImageDto {
    pub id: i32,
    pub url: String,
    pub position: i32,
}

impl RestaurantImageDto {
    pub fn from_entity(image: entity::restaurant_image::Model) -> Self {
        Self {
            id: image.id,
            url: image.url,
            position: image.position,
        }
    }
}

/// List/detail view of a restaurant. Hours and images are populated on the
/// detail endpoint and empty in listings.
#[derive(Serialize)]
pub struct RestaurantDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub cuisine: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub is_open: bool,
    pub delivery_fee_cents: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<OpeningHourDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<RestaurantImageDto>,
}

impl RestaurantDto {
    pub fn from_entity(restaurant: entity::restaurant::Model) -> Self {
        Self {
            id: restaurant.id,
            owner_id: restaurant.owner_id,
            name: restaurant.name,
            description: restaurant.description,
            cuisine: restaurant.cuisine,
            street: restaurant.street,
            city: restaurant.city,
            postal_code: restaurant.postal_code,
            phone: restaurant.phone,
            is_open: restaurant.is_open,
            delivery_fee_cents: restaurant.delivery_fee_cents,
            rating: restaurant.rating,
            rating_count: restaurant.rating_count,
            created_at: restaurant.created_at,
            opening_hours: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn with_details(
        restaurant: entity::restaurant::Model,
        hours: Vec<entity::opening_hour::Model>,
        images: Vec<entity::restaurant_image::Model>,
    ) -> Self {
        let mut dto = Self::from_entity(restaurant);
        dto.opening_hours = hours.into_iter().map(OpeningHourDto::from_entity).collect();
        dto.images = images
            .into_iter()
            .map(RestaurantImageDto::from_entity)
            .collect();
        dto
    }
}

#[derive(Serialize)]
pub struct PaginatedRestaurantsDto {
    pub restaurants: Vec<RestaurantDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize)]
pub struct CreateRestaurantDto {
    pub name: String,
    pub description: Option<String>,
    pub cuisine: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub delivery_fee_cents: i64,
}

#[derive(Deserialize)]
pub struct UpdateRestaurantDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub is_open: Option<bool>,
    pub delivery_fee_cents: Option<i64>,
}

#[derive(Deserialize)]
pub struct OpeningHourInputDto {
    pub weekday: i16,
    pub opens_at: String,
    pub closes_at: String,
}

#[derive(Deserialize)]
pub struct AddImageDto {
    pub url: String,
    #[serde(default)]
    pub position: i32,
}

/// Public listing filters.
#[derive(Deserialize)]
pub struct RestaurantQuery {
    pub cuisine: Option<String>,
    pub city: Option<String>,
    /// Substring match against the restaurant name.
    pub search: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub entries: u64,
}

fn default_per_page() -> u64 {
    20
}

pub struct CreateRestaurantParams {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub cuisine: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub delivery_fee_cents: i64,
}

pub struct UpdateRestaurantParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub is_open: Option<bool>,
    pub delivery_fee_cents: Option<i64>,
}

impl UpdateRestaurantParams {
    pub fn from_dto(id: i32, dto: UpdateRestaurantDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            cuisine: dto.cuisine,
            street: dto.street,
            city: dto.city,
            postal_code: dto.postal_code,
            phone: dto.phone,
            is_open: dto.is_open,
            delivery_fee_cents: dto.delivery_fee_cents,
        }
    }
}

pub struct OpeningHourParams {
    pub weekday: i16,
    pub opens_at: String,
    pub closes_at: String,
}
