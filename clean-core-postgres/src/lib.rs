pub mod config;
pub mod pagination;
pub mod postgres_gateways;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, DatabaseConfig};
pub use pagination::{PgPageQuery, SortColumns};
pub use postgres_gateways::PostgresGateways;
pub use repository::user::PgUserGateway;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helper;
