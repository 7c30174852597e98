use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use entity::enums::Role;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::{
        api::ApiResponse,
        review::{CreateReviewDto, UpdateReviewDto},
    },
    service::review::ReviewService,
    state::AppState,
};

/// Public review listing of a restaurant, newest first.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .list_for_restaurant(restaurant_id)
        .await?;

    Ok(Json(ApiResponse::ok(reviews, "Reviews")))
}

/// Review a delivered order.
///
/// # Access Control
/// - `Customer` - and the order must be the caller's
///
/// # Returns
/// - `201 Created` - The review; the restaurant's rating is recomputed
/// - `409 Conflict` - Order not delivered yet, or already reviewed
pub async fn create_review(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Customer)])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(restaurant_id, &user, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(review, "Review created")),
    ))
}

/// Edit an own review.
pub async fn update_review(
    State(state): State<AppState>,
    identity: Identity,
    Path(review_id): Path<i32>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .update(review_id, &user, payload)
        .await?;

    Ok(Json(ApiResponse::ok(review, "Review updated")))
}

/// Delete a review. Allowed for its author and for admins.
pub async fn delete_review(
    State(state): State<AppState>,
    identity: Identity,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    ReviewService::new(&state.db).delete(review_id, &user).await?;

    Ok(Json(ApiResponse::message("Review deleted")))
}
