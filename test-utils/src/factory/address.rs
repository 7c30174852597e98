//! Address factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    label: String,
    is_default: bool,
}

impl<'a> AddressFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            label: format!("Address {}", next_id()),
            is_default: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            label: ActiveValue::Set(self.label),
            street: ActiveValue::Set("2 Delivery Lane".to_string()),
            city: ActiveValue::Set("Testville".to_string()),
            postal_code: ActiveValue::Set("54321".to_string()),
            is_default: ActiveValue::Set(self.is_default),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values for the given user.
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, user_id).build().await
}
