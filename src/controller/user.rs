//! Customer-owned resources: delivery addresses and favorites.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Identity},
    model::{
        api::ApiResponse,
        user::{CreateAddressDto, UpdateAddressDto},
    },
    service::user::UserService,
    state::AppState,
};

pub async fn get_addresses(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let addresses = UserService::new(&state.db).list_addresses(user.id).await?;

    Ok(Json(ApiResponse::ok(addresses, "Addresses")))
}

pub async fn create_address(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let address = UserService::new(&state.db)
        .create_address(user.id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(address, "Address created")),
    ))
}

pub async fn update_address(
    State(state): State<AppState>,
    identity: Identity,
    Path(address_id): Path<i32>,
    Json(payload): Json<UpdateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let address = UserService::new(&state.db)
        .update_address(user.id, address_id, payload)
        .await?;

    Ok(Json(ApiResponse::ok(address, "Address updated")))
}

pub async fn delete_address(
    State(state): State<AppState>,
    identity: Identity,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    UserService::new(&state.db)
        .delete_address(user.id, address_id)
        .await?;

    Ok(Json(ApiResponse::message("Address deleted")))
}

pub async fn get_favorites(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let favorites = UserService::new(&state.db).list_favorites(user.id).await?;

    Ok(Json(ApiResponse::ok(favorites, "Favorite restaurants")))
}

/// Idempotent: marking an already-favorite restaurant succeeds.
pub async fn add_favorite(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    UserService::new(&state.db)
        .add_favorite(user.id, restaurant_id)
        .await?;

    Ok(Json(ApiResponse::message("Restaurant added to favorites")))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    UserService::new(&state.db)
        .remove_favorite(user.id, restaurant_id)
        .await?;

    Ok(Json(ApiResponse::message("Restaurant removed from favorites")))
}
