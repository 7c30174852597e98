use sea_orm::entity::prelude::*;

/// Menu item. Prices are integer cents; SQLite stores them natively and
/// checkout math stays exact.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub menu_category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_category::Entity",
        from = "Column::MenuCategoryId",
        to = "super::menu_category::Column::Id"
    )]
    MenuCategory,
    #[sea_orm(has_many = "super::menu_item_customization::Entity")]
    MenuItemCustomization,
}

impl Related<super::menu_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuCategory.def()
    }
}

impl Related<super::menu_item_customization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItemCustomization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
