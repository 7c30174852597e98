//! Platform administration endpoints. Every handler requires the `admin`
//! role; there is no partial admin access.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use entity::enums::Role;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::{
        admin::{SetUserRoleDto, SetUserStatusDto},
        api::{ApiResponse, PaginationParams},
    },
    service::admin::AdminService,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let page = AdminService::new(&state.db).list_users(&params).await?;

    Ok(Json(ApiResponse::ok(page, "Users")))
}

pub async fn list_orders(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let page = AdminService::new(&state.db).list_orders(&params).await?;

    Ok(Json(ApiResponse::ok(page, "Orders")))
}

pub async fn list_restaurants(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let page = AdminService::new(&state.db).list_restaurants(&params).await?;

    Ok(Json(ApiResponse::ok(page, "Restaurants")))
}

/// Enable or disable an account. A disabled account fails authorization on
/// its next request even with a valid token.
pub async fn set_user_status(
    State(state): State<AppState>,
    identity: Identity,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let user = AdminService::new(&state.db)
        .set_user_status(user_id, payload.is_active)
        .await?;

    Ok(Json(ApiResponse::ok(user, "User status updated")))
}

pub async fn set_user_role(
    State(state): State<AppState>,
    identity: Identity,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Role(Role::Admin)])
        .await?;

    let user = AdminService::new(&state.db)
        .set_user_role(user_id, &payload.role)
        .await?;

    Ok(Json(ApiResponse::ok(user, "User role updated")))
}
