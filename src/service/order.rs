//! Checkout and the order-status workflow.
//!
//! Checkout snapshots item names and prices into the order so later menu
//! edits never change a placed order. Status updates go through
//! `can_transition`; an illegal transition is a conflict, not a validation
//! error, because the request is well-formed but the order is in the wrong
//! state.

use entity::enums::{OrderStatus, Role};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        address::AddressRepository, menu::MenuRepository, order::OrderRepository,
        restaurant::RestaurantRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        admin::PaginatedOrdersDto,
        api::{total_pages, PaginationParams},
        order::{
            can_transition, CheckoutDto, CreateOrderParams, OrderDto, OrderItemParams,
            TrackingDto, UpdateStatusDto,
        },
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for the authenticated customer.
    pub async fn checkout(
        &self,
        customer: &entity::user::Model,
        data: CheckoutDto,
    ) -> Result<OrderDto, AppError> {
        if data.items.is_empty() {
            return Err(AppError::Validation(
                "An order needs at least one item".to_string(),
            ));
        }

        let address = AddressRepository::new(self.db)
            .find_by_id(data.address_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Address {} not found", data.address_id)))?;
        if address.user_id != customer.id {
            return Err(AppError::Validation(
                "Address does not belong to the ordering customer".to_string(),
            ));
        }

        let restaurant = RestaurantRepository::new(self.db)
            .find_by_id(data.restaurant_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Restaurant {} not found", data.restaurant_id))
            })?;
        if !restaurant.is_open {
            return Err(AppError::Conflict(format!(
                "Restaurant '{}' is not accepting orders",
                restaurant.name
            )));
        }

        let menu_repository = MenuRepository::new(self.db);
        let mut items = Vec::with_capacity(data.items.len());
        let mut subtotal_cents: i64 = 0;

        for line in &data.items {
            if line.quantity < 1 {
                return Err(AppError::Validation(format!(
                    "Quantity for item {} must be at least 1",
                    line.menu_item_id
                )));
            }

            let (item, owning_restaurant) = menu_repository
                .find_item_with_restaurant(line.menu_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Menu item {} not found", line.menu_item_id))
                })?;

            if owning_restaurant != restaurant.id {
                return Err(AppError::Validation(format!(
                    "Menu item {} belongs to a different restaurant",
                    line.menu_item_id
                )));
            }
            if !item.is_available {
                return Err(AppError::Conflict(format!(
                    "'{}' is currently unavailable",
                    item.name
                )));
            }

            subtotal_cents += item.price_cents * i64::from(line.quantity);
            items.push(OrderItemParams {
                menu_item_id: item.id,
                item_name: item.name,
                unit_price_cents: item.price_cents,
                quantity: line.quantity,
            });
        }

        let created = OrderRepository::new(self.db)
            .create(CreateOrderParams {
                customer_id: customer.id,
                restaurant_id: restaurant.id,
                address_id: address.id,
                note: data.note,
                subtotal_cents,
                delivery_fee_cents: restaurant.delivery_fee_cents,
                items,
            })
            .await?;

        tracing::info!(
            order_id = created.order.id,
            customer_id = customer.id,
            restaurant_id = restaurant.id,
            total_cents = created.order.total_cents,
            "Order placed"
        );

        Ok(OrderDto::with_items(created.order, created.items))
    }

    /// Fetches one order with its items, enforcing read access.
    pub async fn get(
        &self,
        order_id: i32,
        user: &entity::user::Model,
    ) -> Result<OrderDto, AppError> {
        let loaded = OrderRepository::new(self.db)
            .get_with_items(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        self.ensure_can_view(&loaded.order, user).await?;

        Ok(OrderDto::with_items(loaded.order, loaded.items))
    }

    /// Tracking history of an order, oldest entry first.
    pub async fn get_tracking(
        &self,
        order_id: i32,
        user: &entity::user::Model,
    ) -> Result<Vec<TrackingDto>, AppError> {
        let repository = OrderRepository::new(self.db);
        let order = repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        self.ensure_can_view(&order, user).await?;

        let entries = repository.get_tracking(order_id).await?;
        Ok(entries.into_iter().map(TrackingDto::from_entity).collect())
    }

    pub async fn list_for_customer(
        &self,
        customer_id: i32,
        params: &PaginationParams,
    ) -> Result<PaginatedOrdersDto, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .list_by_customer(customer_id, params.page, params.entries)
            .await?;

        Ok(PaginatedOrdersDto {
            orders: orders.into_iter().map(OrderDto::from_entity).collect(),
            total,
            page: params.page,
            per_page: params.entries,
            total_pages: total_pages(total, params.entries),
        })
    }

    /// Orders for one restaurant. Ownership is checked by the route guard.
    pub async fn list_for_restaurant(
        &self,
        restaurant_id: i32,
        params: &PaginationParams,
    ) -> Result<PaginatedOrdersDto, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .list_by_restaurant(restaurant_id, params.page, params.entries)
            .await?;

        Ok(PaginatedOrdersDto {
            orders: orders.into_iter().map(OrderDto::from_entity).collect(),
            total,
            page: params.page,
            per_page: params.entries,
            total_pages: total_pages(total, params.entries),
        })
    }

    /// Moves an order along the workflow. Only the owner of the order's
    /// restaurant or an admin may do this.
    pub async fn update_status(
        &self,
        order_id: i32,
        user: &entity::user::Model,
        data: UpdateStatusDto,
    ) -> Result<OrderDto, AppError> {
        let target = OrderStatus::parse(&data.status).ok_or_else(|| {
            AppError::Validation(format!("Unknown order status '{}'", data.status))
        })?;

        let repository = OrderRepository::new(self.db);
        let order = repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        self.ensure_can_manage(&order, user).await?;

        if !can_transition(order.status, target) {
            return Err(AppError::Conflict(format!(
                "Cannot move order from '{}' to '{}'",
                order.status.as_str(),
                target.as_str()
            )));
        }

        let message = data
            .message
            .unwrap_or_else(|| default_tracking_message(target).to_string());
        let updated = repository.set_status(order, target, message).await?;

        tracing::info!(
            order_id = updated.id,
            status = updated.status.as_str(),
            "Order status updated"
        );

        Ok(OrderDto::from_entity(updated))
    }

    /// Customers see their own orders; owners see their restaurant's; admins
    /// see everything.
    async fn ensure_can_view(
        &self,
        order: &entity::order::Model,
        user: &entity::user::Model,
    ) -> Result<(), AppError> {
        if user.role == Role::Admin || order.customer_id == user.id {
            return Ok(());
        }
        if self.owns_restaurant(order.restaurant_id, user.id).await? {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("No access to order {}", order.id),
        )
        .into())
    }

    async fn ensure_can_manage(
        &self,
        order: &entity::order::Model,
        user: &entity::user::Model,
    ) -> Result<(), AppError> {
        if user.role == Role::Admin {
            return Ok(());
        }
        if self.owns_restaurant(order.restaurant_id, user.id).await? {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            user.id,
            format!("Not allowed to manage order {}", order.id),
        )
        .into())
    }

    async fn owns_restaurant(&self, restaurant_id: i32, user_id: i32) -> Result<bool, AppError> {
        let restaurant = RestaurantRepository::new(self.db)
            .find_by_id(restaurant_id)
            .await?;

        Ok(restaurant.is_some_and(|restaurant| restaurant.owner_id == user_id))
    }
}

fn default_tracking_message(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Order placed",
        OrderStatus::Confirmed => "Order confirmed by the restaurant",
        OrderStatus::Preparing => "Your food is being prepared",
        OrderStatus::ReadyForPickup => "Order is ready for pickup",
        OrderStatus::PickedUp => "Courier picked up the order",
        OrderStatus::OnTheWay => "Courier is on the way",
        OrderStatus::Delivered => "Order delivered",
        OrderStatus::Cancelled => "Order cancelled",
    }
}
