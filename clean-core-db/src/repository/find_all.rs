use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::GatewayResult;

/// Generic gateway trait for loading every live entity without paging
///
/// `sort` holds clauses of the form `"property,asc"`; an empty slice keeps the
/// data store's natural order.
#[async_trait]
pub trait FindAll<T: Identifiable>: Send + Sync {
    async fn find_all(&self, sort: &[String]) -> GatewayResult<Vec<T>>;
}
