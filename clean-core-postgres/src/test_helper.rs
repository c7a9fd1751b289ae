//! Test helper module for tests that need a live PostgreSQL
//!
//! Tests using this module are `#[ignore]`d and `#[serial]`: each one starts
//! from empty user tables.

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::postgres_gateways::PostgresGateways;
use crate::repository::db_init::init_database;
use crate::repository::user::PgUserGateway;

pub struct TestContext {
    pub user_gateway: PgUserGateway,
}

/// Connect using `DATABASE_URL`, create the schema when missing and empty
/// the user tables.
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let pool = DatabaseConfig::from_env()?.connect().await?;

    init_database(&pool).await?;
    sqlx::query("TRUNCATE app_user_idx, app_user").execute(&pool).await?;

    let gateways = PostgresGateways::new(Arc::new(pool));
    Ok(TestContext {
        user_gateway: gateways.user_gateway(),
    })
}
