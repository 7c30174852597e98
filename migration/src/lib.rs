pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_address_table;
mod m20260110_000003_create_restaurant_table;
mod m20260110_000004_create_opening_hour_table;
mod m20260110_000005_create_restaurant_image_table;
mod m20260111_000006_create_menu_category_table;
mod m20260111_000007_create_menu_item_table;
mod m20260111_000008_create_menu_item_customization_table;
mod m20260112_000009_create_order_table;
mod m20260112_000010_create_order_item_table;
mod m20260112_000011_create_order_tracking_table;
mod m20260113_000012_create_review_table;
mod m20260113_000013_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_address_table::Migration),
            Box::new(m20260110_000003_create_restaurant_table::Migration),
            Box::new(m20260110_000004_create_opening_hour_table::Migration),
            Box::new(m20260110_000005_create_restaurant_image_table::Migration),
            Box::new(m20260111_000006_create_menu_category_table::Migration),
            Box::new(m20260111_000007_create_menu_item_table::Migration),
            Box::new(m20260111_000008_create_menu_item_customization_table::Migration),
            Box::new(m20260112_000009_create_order_table::Migration),
            Box::new(m20260112_000010_create_order_item_table::Migration),
            Box::new(m20260112_000011_create_order_tracking_table::Migration),
            Box::new(m20260113_000012_create_review_table::Migration),
            Box::new(m20260113_000013_create_favorite_table::Migration),
        ]
    }
}
