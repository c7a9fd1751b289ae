use async_trait::async_trait;
use clean_core_db::repository::delete_batch::DeleteBatch;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PgUserGateway;

impl PgUserGateway {
    pub(super) async fn delete_batch_impl(
        repo: &PgUserGateway,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Delete from index table first
        let delete_idx_query = r#"DELETE FROM app_user_idx WHERE id = ANY($1)"#;
        let delete_query = r#"DELETE FROM app_user WHERE id = ANY($1)"#;

        let mut transaction = repo.pool.begin().await?;
        sqlx::query(delete_idx_query).bind(ids).execute(&mut *transaction).await?;
        let result = sqlx::query(delete_query).bind(ids).execute(&mut *transaction).await?;
        transaction.commit().await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch for PgUserGateway {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use clean_core_db::repository::{CreateBatch, DeleteBatch, ExistByIds};
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_delete_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        let saved = gateway
            .create_batch(vec![create_test_user("remove1"), create_test_user("remove2")])
            .await?;
        let ids: Vec<Uuid> = saved.iter().map(|u| u.id).collect();

        assert_eq!(gateway.delete_batch(&ids).await?, 2);
        assert_eq!(gateway.delete_batch(&[Uuid::new_v4()]).await?, 0);
        assert!(gateway.exist_by_ids(&ids).await?.iter().all(|(_, exists)| !exists));
        Ok(())
    }
}
