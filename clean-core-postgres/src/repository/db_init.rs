//! Schema setup for the user tables.
//!
//! The `migrations/` directory is embedded at compile time. Each migration is
//! reversible (`.up.sql` / `.down.sql`), so teardown is a full undo.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations. Applied ones are recorded in `_sqlx_migrations`
/// and skipped, so calling this on every start is fine.
///
/// ```rust,no_run
/// # async fn example(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
/// clean_core_postgres::repository::db_init::init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("User schema migrated");
    Ok(())
}

/// Revert every applied migration, dropping `app_user` and `app_user_idx`.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.undo(pool, 0).await?;
    info!("User schema reverted");
    Ok(())
}
