//! Order DTOs, parameters, and the status state machine.
//!
//! The workflow sequence is fixed: pending → confirmed → preparing →
//! ready_for_pickup → picked_up → on_the_way → delivered, with cancelled
//! reachable from any non-terminal state. `can_transition` is the single
//! source of truth; the service layer rejects anything it refuses.

use chrono::{DateTime, Utc};
use entity::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Immediate successor in the forward sequence, if any.
pub fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Pending => Some(OrderStatus::Confirmed),
        OrderStatus::Confirmed => Some(OrderStatus::Preparing),
        OrderStatus::Preparing => Some(OrderStatus::ReadyForPickup),
        OrderStatus::ReadyForPickup => Some(OrderStatus::PickedUp),
        OrderStatus::PickedUp => Some(OrderStatus::OnTheWay),
        OrderStatus::OnTheWay => Some(OrderStatus::Delivered),
        OrderStatus::Delivered | OrderStatus::Cancelled => None,
    }
}

pub fn is_terminal(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Delivered | OrderStatus::Cancelled)
}

/// A transition is legal iff the target is the immediate successor, or the
/// target is `Cancelled` and the current state is non-terminal. Everything
/// else (backward, skipping, re-entering a terminal) is rejected.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    if to == OrderStatus::Cancelled {
        return !is_terminal(from);
    }
    next_status(from) == Some(to)
}

#[derive(Debug, Serialize)]
pub struct OrderItemDto {
    pub menu_item_id: i32,
    pub item_name: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
}

impl OrderItemDto {
    pub fn from_entity(item: entity::order_item::Model) -> Self {
        Self {
            menu_item_id: item.menu_item_id,
            item_name: item.item_name,
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderDto {
    pub id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub address_id: i32,
    pub status: String,
    pub note: Option<String>,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub total_cents: i64,
    pub placed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItemDto>,
}

impl OrderDto {
    pub fn from_entity(order: entity::order::Model) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            restaurant_id: order.restaurant_id,
            address_id: order.address_id,
            status: order.status.as_str().to_string(),
            note: order.note,
            subtotal_cents: order.subtotal_cents,
            delivery_fee_cents: order.delivery_fee_cents,
            total_cents: order.total_cents,
            placed_at: order.placed_at,
            items: Vec::new(),
        }
    }

    pub fn with_items(
        order: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Self {
        let mut dto = Self::from_entity(order);
        dto.items = items.into_iter().map(OrderItemDto::from_entity).collect();
        dto
    }
}

/// One immutable tracking-history entry.
#[derive(Debug, Serialize)]
pub struct TrackingDto {
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl TrackingDto {
    pub fn from_entity(entry: entity::order_tracking::Model) -> Self {
        Self {
            status: entry.status.as_str().to_string(),
            message: entry.message,
            created_at: entry.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CheckoutItemDto {
    pub menu_item_id: i32,
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct CheckoutDto {
    pub restaurant_id: i32,
    pub address_id: i32,
    pub note: Option<String>,
    pub items: Vec<CheckoutItemDto>,
}

#[derive(Deserialize)]
pub struct UpdateStatusDto {
    pub status: String,
    pub message: Option<String>,
}

pub struct OrderItemParams {
    pub menu_item_id: i32,
    pub item_name: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
}

pub struct CreateOrderParams {
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub address_id: i32,
    pub note: Option<String>,
    pub subtotal_cents: i64,
    pub delivery_fee_cents: i64,
    pub items: Vec<OrderItemParams>,
}
