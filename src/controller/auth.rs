use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Identity},
    model::{
        api::ApiResponse,
        auth::{LoginDto, RegisterDto, UpdateProfileDto},
        user::UserDto,
    },
    service::auth::AuthService,
    state::AppState,
};

/// Create an account and log it in.
///
/// Registers a `customer` by default, a `restaurant_owner` when requested,
/// or the initial `admin` when a valid bootstrap code is supplied.
///
/// # Returns
/// - `201 Created` - Token plus the new profile
/// - `400 Bad Request` - Invalid email, password, or bootstrap code
/// - `409 Conflict` - Email already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.config);
    let token = service.register(payload, &state.bootstrap_codes).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(token, "Account created")),
    ))
}

/// Exchange email and password for a token.
///
/// # Returns
/// - `200 OK` - Token plus profile
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account disabled
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.config);
    let token = service.login(payload).await?;

    Ok(Json(ApiResponse::ok(token, "Logged in")))
}

/// Issue a fresh token with a new expiry window. Requires a currently-valid
/// token; the password is not re-checked.
pub async fn refresh(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let service = AuthService::new(&state.db, &state.config);
    let token = service.refresh(&user).await?;

    Ok(Json(ApiResponse::ok(token, "Token refreshed")))
}

/// The caller's own profile.
pub async fn get_profile(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    Ok(Json(ApiResponse::ok(UserDto::from_entity(user), "Profile")))
}

/// Update name, phone, or password. Changing the password requires the
/// current one.
pub async fn update_profile(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let service = AuthService::new(&state.db, &state.config);
    let updated = service.update_profile(user, payload).await?;

    Ok(Json(ApiResponse::ok(updated, "Profile updated")))
}
