//! User Registry
//!
//! A small HTTP service for self-service account registration:
//! - Username and password policy with configurable bounds
//! - Uniqueness checks backed by a database constraint
//! - Argon2 password hashing
//! - Username availability probing

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::StorageBackend;
use domain::AccountRepository;
use infrastructure::account::{
    Argon2Hasher, InMemoryAccountRepository, PostgresAccountRepository, RegistrationService,
};
use infrastructure::storage::{connect_pool, run_account_migrations};
use tracing::{info, warn};

/// Create the application state with all services initialized.
///
/// Fails if the configuration is invalid or the account store cannot be
/// reached, so the server never starts accepting requests in that state.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let policy = config.registration.policy()?;
    let hasher = Argon2Hasher::with_params(
        config.hashing.memory_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?;

    info!(
        username_min = policy.username_min_length(),
        username_max = policy.username_max_length(),
        password_min = policy.password_min_length(),
        password_max = policy.password_max_length(),
        "Registration policy loaded"
    );

    let repository: Arc<dyn AccountRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(&config.database).await?;

            if config.database.run_migrations {
                run_account_migrations(&pool).await?;
            }

            Arc::new(PostgresAccountRepository::new(pool))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory account store; accounts are lost on restart");
            Arc::new(InMemoryAccountRepository::new())
        }
    };

    let service = RegistrationService::new(repository, Arc::new(hasher), policy);

    Ok(AppState::new(Arc::new(service)))
}
