use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(integer(Restaurant::OwnerId))
                    .col(string(Restaurant::Name))
                    .col(string_null(Restaurant::Description))
                    .col(string(Restaurant::Cuisine))
                    .col(string(Restaurant::Street))
                    .col(string(Restaurant::City))
                    .col(string(Restaurant::PostalCode))
                    .col(string_null(Restaurant::Phone))
                    .col(boolean(Restaurant::IsOpen))
                    .col(big_integer(Restaurant::DeliveryFeeCents))
                    .col(double(Restaurant::Rating))
                    .col(integer(Restaurant::RatingCount))
                    .col(timestamp_with_time_zone(Restaurant::CreatedAt))
                    .col(timestamp_with_time_zone(Restaurant::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_owner")
                            .from(Restaurant::Table, Restaurant::OwnerId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Cuisine,
    Street,
    City,
    PostalCode,
    Phone,
    IsOpen,
    DeliveryFeeCents,
    Rating,
    RatingCount,
    CreatedAt,
    UpdatedAt,
}
