use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260112_000009_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderTracking::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderTracking::Id))
                    .col(integer(OrderTracking::OrderId))
                    .col(string(OrderTracking::Status))
                    .col(string(OrderTracking::Message))
                    .col(timestamp_with_time_zone(OrderTracking::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_tracking_order")
                            .from(OrderTracking::Table, OrderTracking::OrderId)
                            .to(Order::Table, Order::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderTracking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderTracking {
    Table,
    Id,
    OrderId,
    Status,
    Message,
    CreatedAt,
}
