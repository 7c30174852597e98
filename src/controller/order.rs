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
        api::{ApiResponse, PaginationParams},
        order::{CheckoutDto, UpdateStatusDto},
    },
    service::order::OrderService,
    state::AppState,
};

/// Place an order.
///
/// # Access Control
/// - `Customer` - Only customer accounts can order
///
/// # Returns
/// - `201 Created` - The placed order with its items and totals
/// - `400 Bad Request` - Empty cart, foreign address, or item from another restaurant
/// - `409 Conflict` - Restaurant closed or item unavailable
pub async fn checkout(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CheckoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Customer)])
        .await?;

    let order = OrderService::new(&state.db).checkout(&user, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(order, "Order placed")),
    ))
}

/// The caller's own orders, newest first.
pub async fn list_my_orders(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let page = OrderService::new(&state.db)
        .list_for_customer(user.id, &params)
        .await?;

    Ok(Json(ApiResponse::ok(page, "Orders")))
}

/// One order with items. Visible to its customer, the restaurant's owner,
/// and admins.
pub async fn get_order(
    State(state): State<AppState>,
    identity: Identity,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let order = OrderService::new(&state.db).get(order_id, &user).await?;

    Ok(Json(ApiResponse::ok(order, "Order")))
}

/// Append-only status history of an order, oldest entry first.
pub async fn get_tracking(
    State(state): State<AppState>,
    identity: Identity,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let history = OrderService::new(&state.db)
        .get_tracking(order_id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(history, "Order tracking")))
}

/// Incoming orders of one restaurant.
///
/// # Access Control
/// - Owner of this restaurant, or admin
pub async fn list_restaurant_orders(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let page = OrderService::new(&state.db)
        .list_for_restaurant(restaurant_id, &params)
        .await?;

    Ok(Json(ApiResponse::ok(page, "Restaurant orders")))
}

/// Move an order one step along the workflow, or cancel it.
///
/// # Returns
/// - `200 OK` - The order with its new status
/// - `400 Bad Request` - Unknown status string
/// - `403 Forbidden` - Caller is neither the restaurant's owner nor admin
/// - `409 Conflict` - Transition not allowed from the current status
pub async fn update_status(
    State(state): State<AppState>,
    identity: Identity,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .update_status(order_id, &user, payload)
        .await?;

    Ok(Json(ApiResponse::ok(order, "Order status updated")))
}
