use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of an identity. Never exposes the password hash.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AddressDto {
    pub id: i32,
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub is_default: bool,
}

impl AddressDto {
    pub fn from_entity(address: entity::address::Model) -> Self {
        Self {
            id: address.id,
            label: address.label,
            street: address.street,
            city: address.city,
            postal_code: address.postal_code,
            is_default: address.is_default,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateAddressDto {
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Deserialize)]
pub struct UpdateAddressDto {
    pub label: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub is_default: Option<bool>,
}
