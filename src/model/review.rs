use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ReviewDto {
    pub id: i32,
    pub order_id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn from_entity(review: entity::review::Model) -> Self {
        Self {
            id: review.id,
            order_id: review.order_id,
            customer_id: review.customer_id,
            restaurant_id: review.restaurant_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateReviewDto {
    /// The delivered order being reviewed. Must belong to the caller and to
    /// the restaurant in the route path.
    pub order_id: i32,
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReviewDto {
    pub rating: Option<i16>,
    pub comment: Option<String>,
}
