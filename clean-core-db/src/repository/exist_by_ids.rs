use async_trait::async_trait;
use uuid::Uuid;

use crate::repository::GatewayResult;

/// Generic gateway trait for checking existence of multiple entities by their IDs
///
/// Returns a vector of tuples where each tuple contains the UUID and a boolean
/// indicating existence, in the order of the provided IDs.
#[async_trait]
pub trait ExistByIds: Send + Sync {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> GatewayResult<Vec<(Uuid, bool)>>;
}
