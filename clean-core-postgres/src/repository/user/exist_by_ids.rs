use async_trait::async_trait;
use clean_core_db::repository::exist_by_ids::ExistByIds;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PgUserGateway;

impl PgUserGateway {
    pub(super) async fn exist_by_ids_impl(
        repo: &PgUserGateway,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT id FROM app_user_idx WHERE id = ANY($1)"#;
        let existing: HashSet<Uuid> = sqlx::query_scalar::<_, Uuid>(query)
            .bind(ids)
            .fetch_all(&*repo.pool)
            .await?
            .into_iter()
            .collect();

        Ok(ids.iter().map(|id| (*id, existing.contains(id))).collect())
    }
}

#[async_trait]
impl ExistByIds for PgUserGateway {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use clean_core_db::repository::{CreateBatch, ExistByIds};
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_exist_by_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        let saved = gateway.create_batch(vec![create_test_user("exists")]).await?;
        let missing = Uuid::new_v4();

        let results = gateway.exist_by_ids(&[saved[0].id, missing]).await?;
        assert_eq!(results, vec![(saved[0].id, true), (missing, false)]);
        Ok(())
    }
}
