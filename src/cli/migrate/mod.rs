//! Migrate command - applies pending schema migrations and exits

use anyhow::bail;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::infrastructure::logging;
use crate::infrastructure::storage::{connect_pool, run_account_migrations};

/// Apply all pending account store migrations
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    if config.database.backend != StorageBackend::Postgres {
        bail!("Migrations require the postgres storage backend");
    }

    let pool = connect_pool(&config.database).await?;
    run_account_migrations(&pool).await?;
    pool.close().await;

    info!("Migrations complete");

    Ok(())
}
