use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::GatewayResult;

/// Generic gateway trait for updating multiple entities in a batch
///
/// All updates are performed within a single transaction for atomicity.
/// Updating an entity that does not exist is an error.
#[async_trait]
pub trait UpdateBatch<T: Identifiable>: Send + Sync {
    /// Update multiple items in a single transaction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of updated entities
    /// * `Err` - An error if the transaction could not be executed
    async fn update_batch(&self, items: Vec<T>) -> GatewayResult<Vec<T>>;
}
