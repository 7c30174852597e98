use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::{
        api::ApiResponse,
        menu::{CreateCategoryDto, CreateMenuItemDto, UpdateCategoryDto, UpdateMenuItemDto},
    },
    service::menu::MenuService,
    state::AppState,
};

/// Public menu view: categories by position, items with customizations.
pub async fn get_menu(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let menu = MenuService::new(&state.db).get_menu(restaurant_id).await?;

    Ok(Json(ApiResponse::ok(menu, "Menu")))
}

pub async fn create_category(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<i32>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let category = MenuService::new(&state.db)
        .create_category(restaurant_id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(category, "Category created")),
    ))
}

pub async fn update_category(
    State(state): State<AppState>,
    identity: Identity,
    Path((restaurant_id, category_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let category = MenuService::new(&state.db)
        .update_category(restaurant_id, category_id, payload)
        .await?;

    Ok(Json(ApiResponse::ok(category, "Category updated")))
}

/// Deletes the category together with its items and their customizations.
pub async fn delete_category(
    State(state): State<AppState>,
    identity: Identity,
    Path((restaurant_id, category_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    MenuService::new(&state.db)
        .delete_category(restaurant_id, category_id)
        .await?;

    Ok(Json(ApiResponse::message("Category deleted")))
}

pub async fn create_item(
    State(state): State<AppState>,
    identity: Identity,
    Path((restaurant_id, category_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let item = MenuService::new(&state.db)
        .create_item(restaurant_id, category_id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(item, "Menu item created")),
    ))
}

pub async fn update_item(
    State(state): State<AppState>,
    identity: Identity,
    Path((restaurant_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    let item = MenuService::new(&state.db)
        .update_item(restaurant_id, item_id, payload)
        .await?;

    Ok(Json(ApiResponse::ok(item, "Menu item updated")))
}

pub async fn delete_item(
    State(state): State<AppState>,
    identity: Identity,
    Path((restaurant_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &identity)
        .require(&[Permission::OwnsRestaurant(restaurant_id)])
        .await?;

    MenuService::new(&state.db)
        .delete_item(restaurant_id, item_id)
        .await?;

    Ok(Json(ApiResponse::message("Menu item deleted")))
}
