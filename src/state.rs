//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pooled handle, the configuration is
//! reference-counted, and the bootstrap code service shares its storage.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::admin::code::BootstrapCodeService};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Immutable configuration constructed once at startup. Handlers read the
    /// JWT secret, expiry, and upload directory from here instead of touching
    /// the environment.
    pub config: Arc<Config>,

    /// One-time admin bootstrap codes, armed at startup when no admin
    /// account exists yet.
    pub bootstrap_codes: BootstrapCodeService,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        bootstrap_codes: BootstrapCodeService,
    ) -> Self {
        Self {
            db,
            config,
            bootstrap_codes,
        }
    }
}
