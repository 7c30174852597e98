use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::{
    controller::{admin, auth, menu, order, restaurant, review, upload, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Auth and profile
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route(
            "/api/auth/profile",
            get(auth::get_profile).patch(auth::update_profile),
        )
        // Customer addresses and favorites
        .route(
            "/api/auth/addresses",
            get(user::get_addresses).post(user::create_address),
        )
        .route(
            "/api/auth/addresses/{id}",
            patch(user::update_address).delete(user::delete_address),
        )
        .route("/api/auth/favorites", get(user::get_favorites))
        .route(
            "/api/auth/favorites/{restaurant_id}",
            put(user::add_favorite).delete(user::remove_favorite),
        )
        // Restaurants
        .route(
            "/api/restaurants",
            get(restaurant::list_restaurants).post(restaurant::create_restaurant),
        )
        .route(
            "/api/restaurants/{id}",
            get(restaurant::get_restaurant)
                .patch(restaurant::update_restaurant)
                .delete(restaurant::delete_restaurant),
        )
        .route("/api/restaurants/{id}/hours", put(restaurant::set_opening_hours))
        .route("/api/restaurants/{id}/images", post(restaurant::add_image))
        .route(
            "/api/restaurants/{id}/images/{image_id}",
            delete(restaurant::delete_image),
        )
        // Menus
        .route("/api/restaurants/{id}/menu", get(menu::get_menu))
        .route("/api/restaurants/{id}/categories", post(menu::create_category))
        .route(
            "/api/restaurants/{id}/categories/{category_id}",
            patch(menu::update_category).delete(menu::delete_category),
        )
        .route(
            "/api/restaurants/{id}/categories/{category_id}/items",
            post(menu::create_item),
        )
        .route(
            "/api/restaurants/{id}/items/{item_id}",
            patch(menu::update_item).delete(menu::delete_item),
        )
        // Orders
        .route("/api/orders", get(order::list_my_orders).post(order::checkout))
        .route("/api/orders/{id}", get(order::get_order))
        .route("/api/orders/{id}/tracking", get(order::get_tracking))
        .route("/api/orders/{id}/status", patch(order::update_status))
        .route(
            "/api/restaurants/{id}/orders",
            get(order::list_restaurant_orders),
        )
        // Reviews
        .route(
            "/api/restaurants/{id}/reviews",
            get(review::list_reviews).post(review::create_review),
        )
        .route(
            "/api/reviews/{id}",
            patch(review::update_review).delete(review::delete_review),
        )
        // Uploads
        .route("/api/upload", post(upload::upload_image))
        // Admin
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/orders", get(admin::list_orders))
        .route("/api/admin/restaurants", get(admin::list_restaurants))
        .route("/api/admin/users/{id}/status", patch(admin::set_user_status))
        .route("/api/admin/users/{id}/role", patch(admin::set_user_role))
}
