use axum::{
    extract::{Path, Query, State},
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
        restaurant::{
            AddImageDto, CreateRestaurantDto, OpeningHourInputDto, RestaurantQuery,
            UpdateRestaurantDto,
        },
    },
    service::restaurant::RestaurantService,
    state::AppState,
};

/// Public restaurant listing with optional cuisine, city, and name filters.
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = RestaurantService::new(&state.db).list(&query).await?;

    Ok(Json(ApiResponse::ok(page, "Restaurants")))
}

/// Public detail view including opening hours and images.
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::new(&state.db).get(restaurant_id).await?;

    Ok(Json(ApiResponse::ok(restaurant, "Restaurant")))
}

/// Create a restaurant owned by the caller.
///
/// # Access Control
/// - `RestaurantOwner` - Only owner accounts can create restaurants
pub async fn create_restaurant(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::RestaurantOwner)])
        .await?;

    let restaurant = RestaurantService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(restaurant, "Restaurant created")),
    ))
}

/// # Access Control
/// - Owner of this restaurant, or admin
pub async fn update_restaurant(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<UpdateRestaurantDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let restaurant = RestaurantService::new(&state.db)
        .update(restaurant_id, payload)
        .await?;

    Ok(Json(ApiResponse::ok(restaurant, "Restaurant updated")))
}

/// Deletes the restaurant with its opening hours and images.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    RestaurantService::new(&state.db).delete(restaurant_id).await?;

    Ok(Json(ApiResponse::message("Restaurant deleted")))
}

/// Replaces the full weekly opening-hours schedule.
pub async fn set_opening_hours(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<Vec<OpeningHourInputDto>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let hours = RestaurantService::new(&state.db)
        .set_opening_hours(restaurant_id, payload)
        .await?;

    Ok(Json(ApiResponse::ok(hours, "Opening hours updated")))
}

pub async fn add_image(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<AddImageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let image = RestaurantService::new(&state.db)
        .add_image(restaurant_id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(image, "Image added")),
    ))
}

pub async fn delete_image(
    State(state): State<AppState>,
    identity: Identity,
    Path((restaurant_id, image_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    RestaurantService::new(&state.db)
        .delete_image(restaurant_id, image_id)
        .await?;

    Ok(Json(ApiResponse::message("Image deleted")))
}
