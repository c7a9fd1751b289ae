use async_trait::async_trait;

use crate::repository::GatewayResult;

/// Number of live (not soft-deleted) entities in the data store.
#[async_trait]
pub trait Count: Send + Sync {
    async fn count(&self) -> GatewayResult<u64>;
}
