use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Typed application settings, read from the environment once at startup and
/// carried by reference in `AppState` afterwards.
pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub jwt_secret: String,
    pub token_expiry_hours: i64,

    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
                Err(_) => DEFAULT_PORT,
            },
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_expiry_hours: match std::env::var("TOKEN_EXPIRY_HOURS") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("TOKEN_EXPIRY_HOURS".to_string()))?,
                Err(_) => DEFAULT_TOKEN_EXPIRY_HOURS,
            },
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
