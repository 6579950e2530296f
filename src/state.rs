use std::sync::Arc;

use anyhow::Context;

use travol_config::{BookingPolicy, CorsConfig, DatabaseConfig, JwtConfig};
use travol_db::{PgDocumentStore, SharedStore, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: SharedStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub booking_policy: BookingPolicy,
}

impl AppState {
    /// State over an already constructed store, with the remaining settings
    /// read from the environment.
    pub fn with_store(store: SharedStore) -> anyhow::Result<Self> {
        Ok(Self {
            store,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            booking_policy: BookingPolicy::from_env()?,
        })
    }
}

/// Connects to PostgreSQL, applies migrations and builds the shared state.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;

    crate::db::run_migrations(&pool).await?;

    AppState::with_store(Arc::new(PgDocumentStore::new(pool)))
}
