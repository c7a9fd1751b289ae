use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::repository::GatewayResult;

/// Generic gateway trait for finding a single entity by its ID
///
/// Soft-deleted entities are not returned.
///
/// # Example
/// ```ignore
/// impl FindById<UserModel> for PgUserGateway {
///     async fn find_by_id(&self, id: Uuid) -> GatewayResult<Option<UserModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: Uuid) -> GatewayResult<Option<T>>;
}
