use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_user_table::User;
use crate::m20260110_000003_create_restaurant_table::Restaurant;
use crate::m20260112_000009_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer_uniq(Review::OrderId))
                    .col(integer(Review::CustomerId))
                    .col(integer(Review::RestaurantId))
                    .col(small_integer(Review::Rating))
                    .col(string_null(Review::Comment))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .col(timestamp_with_time_zone(Review::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_order")
                            .from(Review::Table, Review::OrderId)
                            .to(Order::Table, Order::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_customer")
                            .from(Review::Table, Review::CustomerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_restaurant")
                            .from(Review::Table, Review::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    OrderId,
    CustomerId,
    RestaurantId,
    Rating,
    Comment,
    CreatedAt,
    UpdatedAt,
}
