use test_utils::{builder::TestBuilder, factory};

use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::auth::{LoginDto, RegisterDto, UpdateProfileDto},
    service::{
        admin::code::BootstrapCodeService,
        auth::{hash_password, verify_password, AuthService},
    },
};

mod register;
mod update_profile;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "test-secret".to_string(),
        token_expiry_hours: 24,
        upload_dir: "uploads".into(),
    }
}

fn register_dto(email: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "hunter2-long".to_string(),
        name: "New User".to_string(),
        phone: None,
        restaurant_owner: false,
        bootstrap_code: None,
    }
}
