use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260111_000007_create_menu_item_table::MenuItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItemCustomization::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItemCustomization::Id))
                    .col(integer(MenuItemCustomization::MenuItemId))
                    .col(string(MenuItemCustomization::Name))
                    .col(big_integer(MenuItemCustomization::PriceDeltaCents))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_customization_item")
                            .from(
                                MenuItemCustomization::Table,
                                MenuItemCustomization::MenuItemId,
                            )
                            .to(MenuItem::Table, MenuItem::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItemCustomization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItemCustomization {
    Table,
    Id,
    MenuItemId,
    Name,
    PriceDeltaCents,
}
