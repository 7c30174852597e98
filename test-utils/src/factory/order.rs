//! Order factory.
//!
//! Inserts an order together with its initial tracking entry so the history
//! invariant (one tracking row per status the order has held) holds for
//! factory-created data too.

use chrono::Utc;
use entity::enums::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    restaurant_id: i32,
    address_id: i32,
    status: OrderStatus,
    subtotal_cents: i64,
    delivery_fee_cents: i64,
}

impl<'a> OrderFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        customer_id: i32,
        restaurant_id: i32,
        address_id: i32,
    ) -> Self {
        Self {
            db,
            customer_id,
            restaurant_id,
            address_id,
            status: OrderStatus::Pending,
            subtotal_cents: 1000,
            delivery_fee_cents: 250,
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn subtotal_cents(mut self, subtotal_cents: i64) -> Self {
        self.subtotal_cents = subtotal_cents;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        let order = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            address_id: ActiveValue::Set(self.address_id),
            status: ActiveValue::Set(self.status),
            note: ActiveValue::Set(None),
            subtotal_cents: ActiveValue::Set(self.subtotal_cents),
            delivery_fee_cents: ActiveValue::Set(self.delivery_fee_cents),
            total_cents: ActiveValue::Set(self.subtotal_cents + self.delivery_fee_cents),
            placed_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::order_tracking::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set("Order placed".to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(order)
    }
}

/// Creates a pending order with default totals.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
    restaurant_id: i32,
    address_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_id, restaurant_id, address_id)
        .build()
        .await
}

/// Creates an order already in `delivered` status, ready to be reviewed.
pub async fn create_delivered_order(
    db: &DatabaseConnection,
    customer_id: i32,
    restaurant_id: i32,
    address_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_id, restaurant_id, address_id)
        .status(OrderStatus::Delivered)
        .build()
        .await
}
