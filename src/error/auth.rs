use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
///
/// The first five variants are authentication problems (the caller never proved
/// who they are) and map to 401. `AccountDisabled` and `AccessDenied` are
/// authorization problems (a known identity lacks rights) and map to 403.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected route.
    #[error("Missing authorization header")]
    MissingToken,

    /// `Authorization` header present but not `Bearer <token>`.
    #[error("Authorization header is not a bearer token")]
    InvalidScheme,

    /// Token signature invalid, malformed, or referencing an unknown identity.
    #[error("Invalid token")]
    InvalidToken,

    /// Token expiry timestamp is in the past.
    #[error("Token expired")]
    TokenExpired,

    /// Unknown email or password mismatch at login. Deliberately one variant
    /// so the response does not reveal which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Identity exists but has been deactivated by an admin.
    #[error("Account is disabled")]
    AccountDisabled,

    /// Authenticated identity lacks the role or ownership a route requires.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Server-side detail, logged but not returned to the client
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed reason is logged at debug
/// level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidScheme | Self::InvalidToken | Self::TokenExpired => {
                tracing::debug!("Authentication rejected: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("authentication_error", "Unauthorized")),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(
                    "authentication_error",
                    "Invalid email or password",
                )),
            )
                .into_response(),
            Self::AccountDisabled => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("authorization_error", "Account is disabled")),
            )
                .into_response(),
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("authorization_error", "Forbidden")),
                )
                    .into_response()
            }
        }
    }
}
