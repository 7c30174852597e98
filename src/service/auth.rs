//! Registration, login, and profile management.
//!
//! Passwords are stored as argon2id hashes. Login failures collapse into a
//! single `InvalidCredentials` so responses do not reveal whether the email
//! exists. Role assignment happens only here and in the admin service.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use entity::enums::Role;

use crate::{
    config::Config,
    data::user::{CreateUserParams, UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginDto, RegisterDto, TokenDto, UpdateProfileDto},
        user::UserDto,
    },
    service::{admin::code::BootstrapCodeService, token::TokenService},
};

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: TokenService<'a>,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt_secret, config.token_expiry_hours),
        }
    }

    /// Creates an account and logs it in.
    ///
    /// The role is `customer` by default, `restaurant_owner` when requested,
    /// and `admin` only with a valid one-time bootstrap code.
    pub async fn register(
        &self,
        data: RegisterDto,
        bootstrap_codes: &BootstrapCodeService,
    ) -> Result<TokenDto, AppError> {
        validate_email(&data.email)?;
        validate_password(&data.password)?;
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        let role = match data.bootstrap_code {
            Some(code) => {
                if !bootstrap_codes.validate_and_consume(&code) {
                    return Err(AppError::Validation(
                        "Invalid or expired bootstrap code".to_string(),
                    ));
                }
                Role::Admin
            }
            None if data.restaurant_owner => Role::RestaurantOwner,
            None => Role::Customer,
        };

        let repository = UserRepository::new(self.db);
        if repository.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "An account with email '{}' already exists",
                data.email
            )));
        }

        let user = repository
            .create(CreateUserParams {
                email: data.email,
                password_hash: hash_password(&data.password)?,
                name: data.name,
                phone: data.phone,
                role,
            })
            .await?;

        tracing::info!(user_id = user.id, role = user.role.as_str(), "Registered new user");

        let token = self.tokens.issue(&user)?;
        Ok(TokenDto {
            token,
            user: UserDto::from_entity(user),
        })
    }

    pub async fn login(&self, data: LoginDto) -> Result<TokenDto, AppError> {
        let repository = UserRepository::new(self.db);
        let Some(user) = repository.find_by_email(&data.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&data.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        let token = self.tokens.issue(&user)?;
        Ok(TokenDto {
            token,
            user: UserDto::from_entity(user),
        })
    }

    /// Issues a fresh token for an already-authenticated user, resetting its
    /// expiry window.
    pub async fn refresh(&self, user: &entity::user::Model) -> Result<TokenDto, AppError> {
        let token = self.tokens.issue(user)?;
        Ok(TokenDto {
            token,
            user: UserDto::from_entity(user.clone()),
        })
    }

    /// Updates name, phone, and optionally the password. A password change
    /// requires re-verifying the current password.
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        data: UpdateProfileDto,
    ) -> Result<UserDto, AppError> {
        if let Some(new_password) = &data.new_password {
            validate_password(new_password)?;

            let current = data.current_password.as_deref().ok_or_else(|| {
                AppError::Validation(
                    "Current password is required to set a new password".to_string(),
                )
            })?;
            if !verify_password(current, &user.password_hash) {
                return Err(AuthError::InvalidCredentials.into());
            }

            let repository = UserRepository::new(self.db);
            repository
                .update_password_hash(user.id, hash_password(new_password)?)
                .await?;
        }

        let repository = UserRepository::new(self.db);
        let updated = repository
            .update_profile(user.id, data.name, data.phone)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.id)))?;

        Ok(UserDto::from_entity(updated))
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') || trimmed.starts_with('@') {
        return Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))
}

/// A stored hash that fails to parse counts as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
