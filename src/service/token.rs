//! Stateless bearer-token issuance and validation.
//!
//! Tokens are HS256 JWTs carrying `{sub, email, role, iat, exp}`. Expiry is
//! fixed at issuance; there is no server-side revocation. Validation uses zero
//! leeway so a token is rejected the moment its expiry timestamp passes.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

/// Decoded claim set of a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub email: String,
    /// Role string as stored; parsed back into `Role` by the middleware.
    pub role: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

pub struct TokenService<'a> {
    secret: &'a str,
    expiry_hours: i64,
}

impl<'a> TokenService<'a> {
    pub fn new(secret: &'a str, expiry_hours: i64) -> Self {
        Self {
            secret,
            expiry_hours,
        }
    }

    /// Issues a token for the user with expiry `now + expiry_hours`.
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// Validates signature and expiry, with zero leeway on the expiry check.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| AppError::InternalError(format!("Failed to sign token: {}", err)))
    }
}
