use std::sync::Arc;

use coachslot_api::config::ApiConfig;
use coachslot_core::SlotEngine;
use coachslot_db::{create_pool, schema::initialize_database, store::PgStore};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Both store contracts are served by the same pool
    let store = Arc::new(PgStore::new(db_pool));
    let engine = SlotEngine::new(store.clone(), store)
        .with_timezone(config.schedule_timezone)
        .with_commit_timeout(config.booking_commit_timeout);

    // Start API server
    coachslot_api::start_server(config, engine).await?;

    Ok(())
}
