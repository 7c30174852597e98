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
                    .table(RestaurantImage::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantImage::Id))
                    .col(integer(RestaurantImage::RestaurantId))
                    .col(string(RestaurantImage::Url))
                    .col(integer(RestaurantImage::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_image_restaurant")
                            .from(RestaurantImage::Table, RestaurantImage::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RestaurantImage {
    Table,
    Id,
    RestaurantId,
    Url,
    Position,
}
