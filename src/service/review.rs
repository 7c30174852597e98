//! Reviews and the restaurant rating aggregate.
//!
//! A review is tied to one delivered order of the author. One review per
//! order, enforced both here and by a unique index on `order_id`. Every
//! mutation recomputes the restaurant's stored average and count.

use entity::enums::{OrderStatus, Role};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        order::OrderRepository,
        restaurant::RestaurantRepository,
        review::{CreateReviewParams, ReviewRepository},
    },
    error::{auth::AuthError, AppError},
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<ReviewDto>, AppError> {
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

        let reviews = ReviewRepository::new(self.db)
            .list_by_restaurant(restaurant_id)
            .await?;

        Ok(reviews.into_iter().map(ReviewDto::from_entity).collect())
    }

    /// Creates a review for a delivered order of the caller.
    pub async fn create(
        &self,
        restaurant_id: i32,
        customer: &entity::user::Model,
        data: CreateReviewDto,
    ) -> Result<ReviewDto, AppError> {
        validate_rating(data.rating)?;

        let order = OrderRepository::new(self.db)
            .find_by_id(data.order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", data.order_id)))?;

        if order.customer_id != customer.id {
            return Err(AuthError::AccessDenied(
                customer.id,
                format!("Order {} belongs to another customer", order.id),
            )
            .into());
        }
        if order.restaurant_id != restaurant_id {
            return Err(AppError::Validation(format!(
                "Order {} was not placed at restaurant {}",
                order.id, restaurant_id
            )));
        }
        if order.status != OrderStatus::Delivered {
            return Err(AppError::Conflict(
                "Only delivered orders can be reviewed".to_string(),
            ));
        }

        let repository = ReviewRepository::new(self.db);
        if repository.find_by_order(order.id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Order {} has already been reviewed",
                order.id
            )));
        }

        let review = repository
            .create(CreateReviewParams {
                order_id: order.id,
                customer_id: customer.id,
                restaurant_id,
                rating: data.rating,
                comment: data.comment,
            })
            .await?;

        self.recompute_rating(restaurant_id).await?;

        Ok(ReviewDto::from_entity(review))
    }

    /// Edits a review. Only the author may do this.
    pub async fn update(
        &self,
        review_id: i32,
        user: &entity::user::Model,
        data: UpdateReviewDto,
    ) -> Result<ReviewDto, AppError> {
        if let Some(rating) = data.rating {
            validate_rating(rating)?;
        }

        let repository = ReviewRepository::new(self.db);
        let review = repository
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review_id)))?;

        if review.customer_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Review {} belongs to another customer", review.id),
            )
            .into());
        }

        let restaurant_id = review.restaurant_id;
        let updated = repository.update(review, data.rating, data.comment).await?;

        self.recompute_rating(restaurant_id).await?;

        Ok(ReviewDto::from_entity(updated))
    }

    /// Removes a review. The author or an admin may do this; anyone else
    /// gets a 403 even if the review exists.
    pub async fn delete(&self, review_id: i32, user: &entity::user::Model) -> Result<(), AppError> {
        let repository = ReviewRepository::new(self.db);
        let review = repository
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", review_id)))?;

        if review.customer_id != user.id && user.role != Role::Admin {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Review {} belongs to another customer", review.id),
            )
            .into());
        }

        let restaurant_id = review.restaurant_id;
        repository.delete(review.id).await?;

        self.recompute_rating(restaurant_id).await?;

        Ok(())
    }

    async fn recompute_rating(&self, restaurant_id: i32) -> Result<(), AppError> {
        let (rating, count) = ReviewRepository::new(self.db).aggregate(restaurant_id).await?;
        RestaurantRepository::new(self.db)
            .update_rating(restaurant_id, rating, count)
            .await?;

        Ok(())
    }
}

fn validate_rating(rating: i16) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between 1 and 5, got {}",
            rating
        )));
    }
    Ok(())
}
