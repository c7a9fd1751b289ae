use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{ConfigError, DatabaseConfig};
use crate::repository::user::PgUserGateway;

/// Builds gateways sharing one connection pool.
#[derive(Clone)]
pub struct PostgresGateways {
    pool: Arc<PgPool>,
}

impl PostgresGateways {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect with [`DatabaseConfig::from_env`].
    pub async fn from_env() -> Result<Self, ConfigError> {
        let pool = DatabaseConfig::from_env()?.connect().await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn user_gateway(&self) -> PgUserGateway {
        PgUserGateway::new(self.pool.clone())
    }
}
