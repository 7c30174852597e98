//! Menu category and item factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test menu items.
///
/// Defaults: available, 1000 cents, generated name.
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    menu_category_id: i32,
    name: String,
    price_cents: i64,
    is_available: bool,
}

impl<'a> MenuItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, menu_category_id: i32) -> Self {
        Self {
            db,
            menu_category_id,
            name: format!("Item {}", next_id()),
            price_cents: 1000,
            is_available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            menu_category_id: ActiveValue::Set(self.menu_category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            price_cents: ActiveValue::Set(self.price_cents),
            is_available: ActiveValue::Set(self.is_available),
            image_url: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu category with a generated name.
pub async fn create_category(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::menu_category::Model, DbErr> {
    entity::menu_category::ActiveModel {
        restaurant_id: ActiveValue::Set(restaurant_id),
        name: ActiveValue::Set(format!("Category {}", next_id())),
        position: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an available menu item with default values.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    menu_category_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, menu_category_id).build().await
}
