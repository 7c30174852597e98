//! Request authentication and route-level authorization.
//!
//! `Identity` is the extractor: it pulls the bearer token out of the
//! `Authorization` header and verifies it, so a handler that takes an
//! `Identity` parameter cannot run without a valid token. `AuthGuard` is the
//! second stage: it reloads the user from the database (tokens outlive role
//! and status changes) and checks the permissions a route demands.

use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;

use entity::enums::Role;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenService},
    state::AppState,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Verified token claims of the caller.
pub struct Identity {
    pub claims: Claims,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let value = header.to_str().map_err(|_| AuthError::InvalidScheme)?;
        let token = value
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::InvalidScheme)?;

        let claims = TokenService::new(&state.config.jwt_secret, state.config.token_expiry_hours)
            .verify(token)?;

        Ok(Self { claims })
    }
}

/// What a route demands beyond a valid token. Roles match exactly; there is
/// no hierarchy, so a route open to owners and admins lists both.
pub enum Permission {
    Role(Role),
    AnyRole(&'static [Role]),
    /// Caller must own the given restaurant. Admins pass this check.
    OwnsRestaurant(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a Identity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a Identity) -> Self {
        Self { db, identity }
    }

    /// Loads the caller's account and checks every listed permission against
    /// its current database state, not the token's snapshot.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user_id = self.identity.claims.sub;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::InvalidToken.into());
        };
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        for permission in permissions {
            match permission {
                Permission::Role(role) => {
                    if user.role != *role {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "Route requires role '{}' but user has '{}'",
                                role.as_str(),
                                user.role.as_str()
                            ),
                        )
                        .into());
                    }
                }
                Permission::AnyRole(roles) => {
                    if !roles.contains(&user.role) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "Route is not open to role '{}'",
                                user.role.as_str()
                            ),
                        )
                        .into());
                    }
                }
                Permission::OwnsRestaurant(restaurant_id) => {
                    if user.role != Role::Admin {
                        let owns = restaurant_owner_id(self.db, *restaurant_id).await?;
                        match owns {
                            Some(owner_id) if owner_id == user.id => {}
                            Some(_) => {
                                return Err(AuthError::AccessDenied(
                                    user_id,
                                    format!(
                                        "User does not own restaurant {}",
                                        restaurant_id
                                    ),
                                )
                                .into());
                            }
                            None => {
                                return Err(AppError::NotFound(format!(
                                    "Restaurant {} not found",
                                    restaurant_id
                                )));
                            }
                        }
                    }
                }
            }
        }

        Ok(user)
    }
}

async fn restaurant_owner_id(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<Option<i32>, AppError> {
    use sea_orm::EntityTrait;

    let restaurant = entity::prelude::Restaurant::find_by_id(restaurant_id)
        .one(db)
        .await?;

    Ok(restaurant.map(|restaurant| restaurant.owner_id))
}
