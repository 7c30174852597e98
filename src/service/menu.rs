use sea_orm::DatabaseConnection;

use crate::{
    data::{menu::MenuRepository, restaurant::RestaurantRepository},
    error::AppError,
    model::menu::{
        CreateCategoryDto, CreateMenuItemDto, CreateMenuItemParams, CustomizationParams,
        MenuCategoryDto, MenuItemDto, UpdateCategoryDto, UpdateMenuItemDto,
    },
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public menu view of a restaurant.
    pub async fn get_menu(&self, restaurant_id: i32) -> Result<Vec<MenuCategoryDto>, AppError> {
        if RestaurantRepository::new(self.db)
            .find_by_id(restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Restaurant {} not found",
                restaurant_id
            )));
        }

        let menu = MenuRepository::new(self.db).get_menu(restaurant_id).await?;

        Ok(menu
            .into_iter()
            .map(|section| MenuCategoryDto {
                id: section.category.id,
                name: section.category.name,
                position: section.category.position,
                items: section
                    .items
                    .into_iter()
                    .map(|entry| MenuItemDto::from_entity(entry.item, entry.customizations))
                    .collect(),
            })
            .collect())
    }

    pub async fn create_category(
        &self,
        restaurant_id: i32,
        data: CreateCategoryDto,
    ) -> Result<MenuCategoryDto, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Category name must not be empty".to_string(),
            ));
        }

        let category = MenuRepository::new(self.db)
            .create_category(restaurant_id, data.name, data.position)
            .await?;

        Ok(MenuCategoryDto {
            id: category.id,
            name: category.name,
            position: category.position,
            items: Vec::new(),
        })
    }

    pub async fn update_category(
        &self,
        restaurant_id: i32,
        category_id: i32,
        data: UpdateCategoryDto,
    ) -> Result<MenuCategoryDto, AppError> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation(
                    "Category name must not be empty".to_string(),
                ));
            }
        }

        let repository = MenuRepository::new(self.db);
        let category = repository
            .find_category(restaurant_id, category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        let updated = repository
            .update_category(category, data.name, data.position)
            .await?;

        Ok(MenuCategoryDto {
            id: updated.id,
            name: updated.name,
            position: updated.position,
            items: Vec::new(),
        })
    }

    pub async fn delete_category(
        &self,
        restaurant_id: i32,
        category_id: i32,
    ) -> Result<(), AppError> {
        let repository = MenuRepository::new(self.db);
        if repository
            .find_category(restaurant_id, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
        }

        repository.delete_category(category_id).await?;

        Ok(())
    }

    pub async fn create_item(
        &self,
        restaurant_id: i32,
        category_id: i32,
        data: CreateMenuItemDto,
    ) -> Result<MenuItemDto, AppError> {
        validate_item_name(&data.name)?;
        validate_price(data.price_cents)?;

        let repository = MenuRepository::new(self.db);
        if repository
            .find_category(restaurant_id, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
        }

        let created = repository
            .create_item(CreateMenuItemParams {
                menu_category_id: category_id,
                name: data.name,
                description: data.description,
                price_cents: data.price_cents,
                is_available: data.is_available,
                image_url: data.image_url,
                customizations: data
                    .customizations
                    .into_iter()
                    .map(CustomizationParams::from_dto)
                    .collect(),
            })
            .await?;

        Ok(MenuItemDto::from_entity(created.item, created.customizations))
    }

    /// Updates an item after checking it belongs to the given restaurant.
    pub async fn update_item(
        &self,
        restaurant_id: i32,
        item_id: i32,
        data: UpdateMenuItemDto,
    ) -> Result<MenuItemDto, AppError> {
        if let Some(name) = &data.name {
            validate_item_name(name)?;
        }
        if let Some(price) = data.price_cents {
            validate_price(price)?;
        }

        let repository = MenuRepository::new(self.db);
        let item = self.find_owned_item(&repository, restaurant_id, item_id).await?;

        let updated = repository
            .update_item(
                item,
                data.name,
                data.description,
                data.price_cents,
                data.is_available,
                data.image_url,
                data.customizations.map(|replacement| {
                    replacement
                        .into_iter()
                        .map(CustomizationParams::from_dto)
                        .collect()
                }),
            )
            .await?;

        Ok(MenuItemDto::from_entity(updated.item, updated.customizations))
    }

    pub async fn delete_item(&self, restaurant_id: i32, item_id: i32) -> Result<(), AppError> {
        let repository = MenuRepository::new(self.db);
        self.find_owned_item(&repository, restaurant_id, item_id).await?;
        repository.delete_item(item_id).await?;

        Ok(())
    }

    async fn find_owned_item(
        &self,
        repository: &MenuRepository<'a>,
        restaurant_id: i32,
        item_id: i32,
    ) -> Result<entity::menu_item::Model, AppError> {
        let (item, owning_restaurant) = repository
            .find_item_with_restaurant(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menu item {} not found", item_id)))?;

        if owning_restaurant != restaurant_id {
            return Err(AppError::NotFound(format!("Menu item {} not found", item_id)));
        }

        Ok(item)
    }
}

fn validate_item_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Item name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_price(price_cents: i64) -> Result<(), AppError> {
    if price_cents < 0 {
        return Err(AppError::Validation("Price must not be negative".to_string()));
    }
    Ok(())
}
