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
                    .table(OpeningHour::Table)
                    .if_not_exists()
                    .col(pk_auto(OpeningHour::Id))
                    .col(integer(OpeningHour::RestaurantId))
                    .col(small_integer(OpeningHour::Weekday))
                    .col(string(OpeningHour::OpensAt))
                    .col(string(OpeningHour::ClosesAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opening_hour_restaurant")
                            .from(OpeningHour::Table, OpeningHour::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OpeningHour::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OpeningHour {
    Table,
    Id,
    RestaurantId,
    Weekday,
    OpensAt,
    ClosesAt,
}
