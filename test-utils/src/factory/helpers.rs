//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Ensures each factory-created entity gets unique identifying fields such
/// as emails and names, preventing collisions across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete order graph with all dependencies.
///
/// This convenience method creates:
/// 1. Customer (with a delivery address)
/// 2. Restaurant owner and their restaurant
/// 3. A menu category with one item
/// 4. An order of that item, in `pending` status
///
/// Use the individual factories where a test needs custom values.
///
/// # Returns
/// - `Ok((customer, owner, restaurant, item, order))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::restaurant::Model,
        entity::menu_item::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::create_customer(db).await?;
    let address = crate::factory::create_address(db, customer.id).await?;
    let owner = crate::factory::create_owner(db).await?;
    let restaurant = crate::factory::create_restaurant(db, owner.id).await?;
    let category = crate::factory::create_category(db, restaurant.id).await?;
    let item = crate::factory::create_menu_item(db, category.id).await?;
    let order = crate::factory::create_order(db, customer.id, restaurant.id, address.id).await?;

    Ok((customer, owner, restaurant, item, order))
}
