use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::{internal::InternalError, AppError},
    service::{LinkFailureService, SongCatalogService},
};

/// Installs the global tracing subscriber at the configured level.
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level)
        .map_err(|e| InternalError::LoggerInit(e.to_string()))?;

    Ok(())
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Logs catalog size and link failure counts.
pub async fn log_catalog_summary(db: &DatabaseConnection) -> Result<(), AppError> {
    let catalog = SongCatalogService::new(db);
    let link_failures = LinkFailureService::new(db);

    let total = catalog.count().await?;
    let available = catalog.count_available().await?;
    let failures = link_failures.counts().await?;

    tracing::info!(
        "Catalog holds {} songs, {} available ({} not downloaded, {} dead)",
        total,
        available,
        failures.not_downloaded,
        failures.dead
    );

    if total > 0 && available == 0 {
        tracing::warn!("No songs are available; every catalog link has a failure record");
    }

    Ok(())
}
