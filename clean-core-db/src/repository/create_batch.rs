use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::GatewayResult;

/// Generic gateway trait for creating multiple entities in a batch
///
/// All creates are performed within a single transaction for atomicity.
/// Returns saved items with any generated fields populated.
///
/// # Example
/// ```ignore
/// impl CreateBatch<UserModel> for PgUserGateway {
///     async fn create_batch(&self, items: Vec<UserModel>) -> GatewayResult<Vec<UserModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Save multiple items in a single transaction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of created entities with generated fields populated
    /// * `Err` - An error if the transaction could not be executed
    async fn create_batch(&self, items: Vec<T>) -> GatewayResult<Vec<T>>;
}
