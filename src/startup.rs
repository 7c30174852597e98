use sea_orm::DatabaseConnection;

use crate::{config::Config, error::AppError, service::admin::code::BootstrapCodeService};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,mealdrop=debug")),
        )
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Arms a one-time admin bootstrap code when no admin account exists yet.
///
/// The code is written to the log; registering with it creates the first
/// admin. Nothing happens on subsequent startups once an admin is present.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    bootstrap_codes: &BootstrapCodeService,
) -> Result<(), AppError> {
    use crate::data::user::UserRepository;

    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = bootstrap_codes.generate();
    tracing::info!(
        "No admin account found. Register within 10 minutes using bootstrap_code: {}",
        code
    );

    Ok(())
}

/// Creates the upload directory if it is missing.
pub async fn ensure_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|err| {
            AppError::InternalError(format!(
                "Failed to create upload directory {}: {}",
                config.upload_dir.display(),
                err
            ))
        })
}
