use std::sync::Arc;

use chrono::Utc;
use clean_core_api::{ApiError, ApiResult, UserStatus};
use tracing::{info, instrument};
use uuid::Uuid;

use super::USER;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

/// Soft delete: the user is marked deleted and hidden from reads.
pub struct DeleteUser<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> DeleteUser<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: Uuid) -> ApiResult<()> {
        let mut user = self
            .gateway
            .find_by_id(id)
            .await
            .map_err(gateway_error)?
            .ok_or(ApiError::NotFound {
                entity: USER,
                field: "id",
            })?;

        let now = Utc::now();
        user.deleted_at = Some(now);
        user.updated_at = Some(now);
        user.status = UserStatus::Deleted;

        self.gateway
            .update_batch(vec![user])
            .await
            .map_err(gateway_error)?;
        info!(%id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{Count, LoadBatch};
    use crate::usecase::user::fixtures::gateway_with;
    use crate::usecase::user::FindUserByUsername;

    #[tokio::test]
    async fn test_delete_is_soft() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let gateway = Arc::new(gateway_with(&["alice", "bobby"]));
        let alice = FindUserByUsername::new(gateway.clone()).execute("alice").await?;
        let id = Uuid::parse_str(&alice.id)?;

        DeleteUser::new(gateway.clone()).execute(id).await?;

        assert_eq!(gateway.count().await?, 1);
        let stored = gateway.load_batch(&[id]).await?.remove(0).unwrap();
        assert_eq!(stored.status, UserStatus::Deleted);
        assert!(stored.deleted_at.is_some());

        let again = DeleteUser::new(gateway).execute(id).await.unwrap_err();
        assert!(matches!(again, ApiError::NotFound { .. }));
        Ok(())
    }
}
