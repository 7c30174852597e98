use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_user_table::User;
use crate::m20260110_000002_create_address_table::Address;
use crate::m20260110_000003_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::CustomerId))
                    .col(integer(Order::RestaurantId))
                    .col(integer(Order::AddressId))
                    .col(string(Order::Status))
                    .col(string_null(Order::Note))
                    .col(big_integer(Order::SubtotalCents))
                    .col(big_integer(Order::DeliveryFeeCents))
                    .col(big_integer(Order::TotalCents))
                    .col(timestamp_with_time_zone(Order::PlacedAt))
                    .col(timestamp_with_time_zone(Order::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer")
                            .from(Order::Table, Order::CustomerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_restaurant")
                            .from(Order::Table, Order::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_address")
                            .from(Order::Table, Order::AddressId)
                            .to(Address::Table, Address::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    CustomerId,
    RestaurantId,
    AddressId,
    Status,
    Note,
    SubtotalCents,
    DeliveryFeeCents,
    TotalCents,
    PlacedAt,
    UpdatedAt,
}
