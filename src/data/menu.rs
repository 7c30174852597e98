use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::menu::{CreateMenuItemParams, CustomizationParams};

/// Menu item together with its customizations.
pub struct ItemWithCustomizations {
    pub item: entity::menu_item::Model,
    pub customizations: Vec<entity::menu_item_customization::Model>,
}

/// One menu section with its items.
pub struct CategoryWithItems {
    pub category: entity::menu_category::Model,
    pub items: Vec<ItemWithCustomizations>,
}

pub struct MenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Full menu of a restaurant: categories by position, items by name,
    /// each item with its customizations.
    pub async fn get_menu(&self, restaurant_id: i32) -> Result<Vec<CategoryWithItems>, DbErr> {
        let categories = entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::menu_category::Column::Position)
            .all(self.db)
            .await?;

        let mut menu = Vec::with_capacity(categories.len());
        for category in categories {
            let items = entity::prelude::MenuItem::find()
                .filter(entity::menu_item::Column::MenuCategoryId.eq(category.id))
                .order_by_asc(entity::menu_item::Column::Name)
                .all(self.db)
                .await?;

            let mut with_customizations = Vec::with_capacity(items.len());
            for item in items {
                let customizations = entity::prelude::MenuItemCustomization::find()
                    .filter(entity::menu_item_customization::Column::MenuItemId.eq(item.id))
                    .order_by_asc(entity::menu_item_customization::Column::Id)
                    .all(self.db)
                    .await?;
                with_customizations.push(ItemWithCustomizations {
                    item,
                    customizations,
                });
            }

            menu.push(CategoryWithItems {
                category,
                items: with_customizations,
            });
        }

        Ok(menu)
    }

    pub async fn create_category(
        &self,
        restaurant_id: i32,
        name: String,
        position: i32,
    ) -> Result<entity::menu_category::Model, DbErr> {
        entity::menu_category::ActiveModel {
            restaurant_id: ActiveValue::Set(restaurant_id),
            name: ActiveValue::Set(name),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a category scoped to a restaurant so a path like
    /// `/restaurants/1/categories/9` cannot touch another restaurant's menu.
    pub async fn find_category(
        &self,
        restaurant_id: i32,
        category_id: i32,
    ) -> Result<Option<entity::menu_category::Model>, DbErr> {
        entity::prelude::MenuCategory::find()
            .filter(entity::menu_category::Column::Id.eq(category_id))
            .filter(entity::menu_category::Column::RestaurantId.eq(restaurant_id))
            .one(self.db)
            .await
    }

    pub async fn update_category(
        &self,
        category: entity::menu_category::Model,
        name: Option<String>,
        position: Option<i32>,
    ) -> Result<entity::menu_category::Model, DbErr> {
        let mut active: entity::menu_category::ActiveModel = category.into();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(position) = position {
            active.position = ActiveValue::Set(position);
        }

        active.update(self.db).await
    }

    /// Deletes a category with its items and their customizations.
    pub async fn delete_category(&self, category_id: i32) -> Result<(), DbErr> {
        let items = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::MenuCategoryId.eq(category_id))
            .all(self.db)
            .await?;

        for item in &items {
            entity::prelude::MenuItemCustomization::delete_many()
                .filter(entity::menu_item_customization::Column::MenuItemId.eq(item.id))
                .exec(self.db)
                .await?;
        }

        entity::prelude::MenuItem::delete_many()
            .filter(entity::menu_item::Column::MenuCategoryId.eq(category_id))
            .exec(self.db)
            .await?;
        entity::prelude::MenuCategory::delete_by_id(category_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn create_item(
        &self,
        params: CreateMenuItemParams,
    ) -> Result<ItemWithCustomizations, DbErr> {
        let item = entity::menu_item::ActiveModel {
            menu_category_id: ActiveValue::Set(params.menu_category_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price_cents: ActiveValue::Set(params.price_cents),
            is_available: ActiveValue::Set(params.is_available),
            image_url: ActiveValue::Set(params.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let customizations = self
            .insert_customizations(item.id, params.customizations)
            .await?;

        Ok(ItemWithCustomizations {
            item,
            customizations,
        })
    }

    /// Finds an item and the restaurant it belongs to (via its category).
    pub async fn find_item_with_restaurant(
        &self,
        item_id: i32,
    ) -> Result<Option<(entity::menu_item::Model, i32)>, DbErr> {
        let Some(item) = entity::prelude::MenuItem::find_by_id(item_id).one(self.db).await? else {
            return Ok(None);
        };

        let category = entity::prelude::MenuCategory::find_by_id(item.menu_category_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Menu category {} missing for item {}",
                    item.menu_category_id, item.id
                ))
            })?;

        Ok(Some((item, category.restaurant_id)))
    }

    pub async fn update_item(
        &self,
        item: entity::menu_item::Model,
        name: Option<String>,
        description: Option<String>,
        price_cents: Option<i64>,
        is_available: Option<bool>,
        image_url: Option<String>,
        customizations: Option<Vec<CustomizationParams>>,
    ) -> Result<ItemWithCustomizations, DbErr> {
        let item_id = item.id;

        let mut active: entity::menu_item::ActiveModel = item.into();
        if let Some(name) = name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(price_cents) = price_cents {
            active.price_cents = ActiveValue::Set(price_cents);
        }
        if let Some(is_available) = is_available {
            active.is_available = ActiveValue::Set(is_available);
        }
        if let Some(image_url) = image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        let item = active.update(self.db).await?;

        let customizations = match customizations {
            Some(replacement) => {
                entity::prelude::MenuItemCustomization::delete_many()
                    .filter(entity::menu_item_customization::Column::MenuItemId.eq(item_id))
                    .exec(self.db)
                    .await?;
                self.insert_customizations(item_id, replacement).await?
            }
            None => {
                entity::prelude::MenuItemCustomization::find()
                    .filter(entity::menu_item_customization::Column::MenuItemId.eq(item_id))
                    .order_by_asc(entity::menu_item_customization::Column::Id)
                    .all(self.db)
                    .await?
            }
        };

        Ok(ItemWithCustomizations {
            item,
            customizations,
        })
    }

    pub async fn delete_item(&self, item_id: i32) -> Result<(), DbErr> {
        entity::prelude::MenuItemCustomization::delete_many()
            .filter(entity::menu_item_customization::Column::MenuItemId.eq(item_id))
            .exec(self.db)
            .await?;
        entity::prelude::MenuItem::delete_by_id(item_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn insert_customizations(
        &self,
        item_id: i32,
        customizations: Vec<CustomizationParams>,
    ) -> Result<Vec<entity::menu_item_customization::Model>, DbErr> {
        let mut created = Vec::with_capacity(customizations.len());
        for customization in customizations {
            let model = entity::menu_item_customization::ActiveModel {
                menu_item_id: ActiveValue::Set(item_id),
                name: ActiveValue::Set(customization.name),
                price_delta_cents: ActiveValue::Set(customization.price_delta_cents),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            created.push(model);
        }

        Ok(created)
    }
}
