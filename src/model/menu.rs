use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct CustomizationDto {
    pub id: i32,
    pub name: String,
    pub price_delta_cents: i64,
}

impl CustomizationDto {
    pub fn from_entity(customization: entity::menu_item_customization::Model) -> Self {
        Self {
            id: customization.id,
            name: customization.name,
            price_delta_cents: customization.price_delta_cents,
        }
    }
}

#[derive(Serialize)]
pub struct MenuItemDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<String>,
    pub customizations: Vec<CustomizationDto>,
}

impl MenuItemDto {
    pub fn from_entity(
        item: entity::menu_item::Model,
        customizations: Vec<entity::menu_item_customization::Model>,
    ) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price_cents: item.price_cents,
            is_available: item.is_available,
            image_url: item.image_url,
            customizations: customizations
                .into_iter()
                .map(CustomizationDto::from_entity)
                .collect(),
        }
    }
}

/// One menu section with its items, ordered by position.
#[derive(Serialize)]
pub struct MenuCategoryDto {
    pub id: i32,
    pub name: String,
    pub position: i32,
    pub items: Vec<MenuItemDto>,
}

#[derive(Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
    #[serde(default)]
    pub position: i32,
}

#[derive(Deserialize)]
pub struct UpdateCategoryDto {
    pub name: Option<String>,
    pub position: Option<i32>,
}

#[derive(Deserialize)]
pub struct CustomizationInputDto {
    pub name: String,
    #[serde(default)]
    pub price_delta_cents: i64,
}

#[derive(Deserialize)]
pub struct CreateMenuItemDto {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub image_url: Option<String>,
    #[serde(default)]
    pub customizations: Vec<CustomizationInputDto>,
}

fn default_available() -> bool {
    true
}

#[derive(Deserialize)]
pub struct UpdateMenuItemDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub is_available: Option<bool>,
    pub image_url: Option<String>,
    /// When present, replaces the full customization set.
    pub customizations: Option<Vec<CustomizationInputDto>>,
}

pub struct CreateMenuItemParams {
    pub menu_category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<String>,
    pub customizations: Vec<CustomizationParams>,
}

pub struct CustomizationParams {
    pub name: String,
    pub price_delta_cents: i64,
}

impl CustomizationParams {
    pub fn from_dto(dto: CustomizationInputDto) -> Self {
        Self {
            name: dto.name,
            price_delta_cents: dto.price_delta_cents,
        }
    }
}
