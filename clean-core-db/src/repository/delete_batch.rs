use async_trait::async_trait;
use uuid::Uuid;

use crate::repository::GatewayResult;

/// Generic gateway trait for permanently deleting multiple entities in a batch
///
/// All deletes are performed within a single transaction for atomicity.
/// Unknown IDs are ignored.
#[async_trait]
pub trait DeleteBatch: Send + Sync {
    /// Delete multiple items by their IDs in a single transaction
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items actually deleted
    /// * `Err` - An error if the transaction could not be executed
    async fn delete_batch(&self, ids: &[Uuid]) -> GatewayResult<usize>;
}
