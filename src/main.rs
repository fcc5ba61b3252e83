#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use travel_rental::{
    config::{categories, database},
    core::category,
    errors::Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and create tables
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed the category catalog
    if Path::new(categories::DEFAULT_CONFIG_PATH).exists() {
        let config = categories::load_default_config()
            .inspect_err(|e| error!("Failed to load category catalog: {}", e))?;
        let inserted = category::seed_categories(&db, &config.categories).await?;
        info!(
            inserted,
            total = config.categories.len(),
            "Category catalog seeded."
        );
    } else {
        warn!(
            "No {} found, skipping category seeding.",
            categories::DEFAULT_CONFIG_PATH
        );
    }

    let catalog = category::get_all_categories(&db).await?;
    info!(categories = catalog.len(), "Travel rental database is ready.");

    Ok(())
}
