use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use entity::enums::OrderStatus;

use crate::model::order::CreateOrderParams;

/// Order row together with its line items.
pub struct OrderWithItems {
    pub order: entity::order::Model,
    pub items: Vec<entity::order_item::Model>,
}

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order with its line items and the initial `pending`
    /// tracking entry, in one transaction.
    pub async fn create(&self, params: CreateOrderParams) -> Result<OrderWithItems, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let order = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            address_id: ActiveValue::Set(params.address_id),
            status: ActiveValue::Set(OrderStatus::Pending),
            note: ActiveValue::Set(params.note),
            subtotal_cents: ActiveValue::Set(params.subtotal_cents),
            delivery_fee_cents: ActiveValue::Set(params.delivery_fee_cents),
            total_cents: ActiveValue::Set(params.subtotal_cents + params.delivery_fee_cents),
            placed_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(params.items.len());
        for item in params.items {
            let model = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                menu_item_id: ActiveValue::Set(item.menu_item_id),
                item_name: ActiveValue::Set(item.item_name),
                unit_price_cents: ActiveValue::Set(item.unit_price_cents),
                quantity: ActiveValue::Set(item.quantity),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(model);
        }

        entity::order_tracking::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            status: ActiveValue::Set(OrderStatus::Pending),
            message: ActiveValue::Set("Order placed".to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(OrderWithItems { order, items })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    pub async fn get_with_items(&self, id: i32) -> Result<Option<OrderWithItems>, DbErr> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(OrderWithItems { order, items }))
    }

    /// Tracking history, oldest first. Rows are append-only so insertion id
    /// order is chronological order.
    pub async fn get_tracking(
        &self,
        order_id: i32,
    ) -> Result<Vec<entity::order_tracking::Model>, DbErr> {
        entity::prelude::OrderTracking::find()
            .filter(entity::order_tracking::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_tracking::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the order status and appends the matching tracking entry in
    /// one transaction. Transition legality is checked by the service.
    pub async fn set_status(
        &self,
        order: entity::order::Model,
        status: OrderStatus,
        message: String,
    ) -> Result<entity::order::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();
        let order_id = order.id;

        let mut active: entity::order::ActiveModel = order.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(now);
        let updated = active.update(&txn).await?;

        entity::order_tracking::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            status: ActiveValue::Set(status),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(updated)
    }

    pub async fn list_by_customer(
        &self,
        customer_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    pub async fn list_by_restaurant(
        &self,
        restaurant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }
}
