use dioxus_logger::tracing;

use songboard::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(&config)?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Database ready, migrations applied");

    if let Err(e) = startup::log_catalog_summary(&db).await {
        tracing::error!("Failed to summarize catalog: {}", e);
        return Err(e);
    }

    Ok(())
}
