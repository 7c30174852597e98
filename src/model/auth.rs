use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    /// Requests a `restaurant_owner` account instead of the default `customer`.
    #[serde(default)]
    pub restaurant_owner: bool,
    /// One-time code printed at first startup; registers the initial admin.
    pub bootstrap_code: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Issued token plus the profile it authenticates.
#[derive(Debug, Serialize)]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Deserialize)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Required when `new_password` is set; the current password is
    /// re-verified before the hash is replaced.
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}
