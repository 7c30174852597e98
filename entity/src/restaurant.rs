use sea_orm::entity::prelude::*;

/// Restaurant owned by exactly one `restaurant_owner` identity.
///
/// `rating` and `rating_count` are denormalized aggregates recomputed from
/// the review table after every review create/update/delete.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub cuisine: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub is_open: bool,
    pub delivery_fee_cents: i64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::opening_hour::Entity")]
    OpeningHour,
    #[sea_orm(has_many = "super::restaurant_image::Entity")]
    RestaurantImage,
    #[sea_orm(has_many = "super::menu_category::Entity")]
    MenuCategory,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::opening_hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpeningHour.def()
    }
}

impl Related<super::restaurant_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantImage.def()
    }
}

impl Related<super::menu_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuCategory.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
