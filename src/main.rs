//! Food-delivery API backend.
//!
//! The server follows a layered architecture:
//!
//! - **Controller** (`controller/`) - HTTP handlers, access control, DTO conversion
//! - **Service** (`service/`) - Business logic between controllers and data access
//! - **Data** (`data/`) - Repository types wrapping SeaORM queries
//! - **Model** (`model/`) - DTOs, parameter structs, and the order state machine
//! - **Error** (`error/`) - Error hierarchy and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token extraction and route guards

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use crate::{config::Config, service::admin::code::BootstrapCodeService, state::AppState};

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_upload_dir(&config).await?;

    let bootstrap_codes = BootstrapCodeService::new();
    startup::check_for_admin(&db, &bootstrap_codes).await?;

    let addr = config.bind_addr();
    let state = AppState::new(db, Arc::new(config), bootstrap_codes);
    let app = router::router().with_state(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| error::AppError::InternalError(format!("Failed to bind {}: {}", addr, err)))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| error::AppError::InternalError(format!("Server error: {}", err)))?;

    Ok(())
}
