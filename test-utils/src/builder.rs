use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Generates CREATE TABLE statements from entity models and executes them
/// against a fresh in-memory SQLite database when `build()` is called.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Restaurant)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order: tables with foreign keys
    /// after their referenced tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account-level tables: `User`, `Address`, `Restaurant`,
    /// `OpeningHour`, and `RestaurantImage`.
    pub fn with_core_tables(self) -> Self {
        self.with_table(User)
            .with_table(Address)
            .with_table(Restaurant)
            .with_table(OpeningHour)
            .with_table(RestaurantImage)
    }

    /// Core tables plus the menu hierarchy.
    pub fn with_menu_tables(self) -> Self {
        self.with_core_tables()
            .with_table(MenuCategory)
            .with_table(MenuItem)
            .with_table(MenuItemCustomization)
    }

    /// Menu tables plus orders, order items, and tracking history.
    pub fn with_order_tables(self) -> Self {
        self.with_menu_tables()
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(OrderTracking)
    }

    /// Order tables plus reviews.
    pub fn with_review_tables(self) -> Self {
        self.with_order_tables().with_table(Review)
    }

    /// Every table the application knows.
    pub fn with_all_tables(self) -> Self {
        self.with_review_tables().with_table(Favorite)
    }

    /// Builds and initializes the test context with configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
