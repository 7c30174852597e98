use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000003_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuCategory::Id))
                    .col(integer(MenuCategory::RestaurantId))
                    .col(string(MenuCategory::Name))
                    .col(integer(MenuCategory::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_category_restaurant")
                            .from(MenuCategory::Table, MenuCategory::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuCategory {
    Table,
    Id,
    RestaurantId,
    Name,
    Position,
}
