//! Closed enums backing string columns.
//!
//! `Role` and `OrderStatus` are stored as lowercase strings but handled as
//! exhaustive enums everywhere above the storage layer, so a typo'd role or
//! status cannot slip through a string comparison.

use sea_orm::entity::prelude::*;

/// Account role. Determines which routes an identity may call.
///
/// There is no hierarchy: an `Admin` is not implicitly a `RestaurantOwner`.
/// Route guards list the roles they accept explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[sea_orm(string_value = "customer")]
    Customer,
    #[sea_orm(string_value = "restaurant_owner")]
    RestaurantOwner,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::RestaurantOwner => "restaurant_owner",
            Self::Admin => "admin",
        }
    }

    /// Parses the wire/storage representation. Exact match, case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Self::Customer),
            "restaurant_owner" => Some(Self::RestaurantOwner),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Lifecycle status of an order.
///
/// The forward sequence runs `Pending` through `Delivered`; `Cancelled` is
/// reachable from any non-terminal state. Transition rules live in the server
/// crate's order model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "preparing")]
    Preparing,
    #[sea_orm(string_value = "ready_for_pickup")]
    ReadyForPickup,
    #[sea_orm(string_value = "picked_up")]
    PickedUp,
    #[sea_orm(string_value = "on_the_way")]
    OnTheWay,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::ReadyForPickup => "ready_for_pickup",
            Self::PickedUp => "picked_up",
            Self::OnTheWay => "on_the_way",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "preparing" => Some(Self::Preparing),
            "ready_for_pickup" => Some(Self::ReadyForPickup),
            "picked_up" => Some(Self::PickedUp),
            "on_the_way" => Some(Self::OnTheWay),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}
