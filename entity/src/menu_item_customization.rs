use sea_orm::entity::prelude::*;

/// Optional add-on for a menu item (extra topping, size upgrade, ...).
/// `price_delta_cents` may be negative.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item_customization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub menu_item_id: i32,
    pub name: String,
    pub price_delta_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id"
    )]
    MenuItem,
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
