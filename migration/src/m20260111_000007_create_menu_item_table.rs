use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260111_000006_create_menu_category_table::MenuCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::MenuCategoryId))
                    .col(string(MenuItem::Name))
                    .col(string_null(MenuItem::Description))
                    .col(big_integer(MenuItem::PriceCents))
                    .col(boolean(MenuItem::IsAvailable))
                    .col(string_null(MenuItem::ImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_category")
                            .from(MenuItem::Table, MenuItem::MenuCategoryId)
                            .to(MenuCategory::Table, MenuCategory::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    MenuCategoryId,
    Name,
    Description,
    PriceCents,
    IsAvailable,
    ImageUrl,
}
