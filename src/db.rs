use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

/// Applies pending migrations from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    info!("Database migrations applied");
    Ok(())
}
