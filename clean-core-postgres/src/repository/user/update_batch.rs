use async_trait::async_trait;
use clean_core_db::models::user::UserModel;
use clean_core_db::models::Indexable;
use clean_core_db::repository::update_batch::UpdateBatch;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PgUserGateway;

impl PgUserGateway {
    pub(super) async fn update_batch_impl(
        repo: &PgUserGateway,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let update_query = r#"
            UPDATE app_user SET
                first_name = $2, last_name = $3, username = $4, email = $5, status = $6,
                created_at = $7, updated_at = $8, deleted_at = $9, disabled_at = $10,
                last_login_at = $11
            WHERE id = $1
        "#;
        let update_idx_query = r#"
            UPDATE app_user_idx SET username_hash = $2, email_hash = $3 WHERE id = $1
        "#;

        let mut transaction = repo.pool.begin().await?;
        for item in &items {
            item.validate()?;
            let idx = item.to_index()?;

            let result = sqlx::query(update_query)
                .bind(item.id)
                .bind(item.first_name.as_str())
                .bind(item.last_name.as_ref().map(|s| s.as_str()))
                .bind(item.username.as_str())
                .bind(item.email.as_str())
                .bind(item.status.key())
                .bind(item.created_at)
                .bind(item.updated_at)
                .bind(item.deleted_at)
                .bind(item.disabled_at)
                .bind(item.last_login_at)
                .execute(&mut *transaction)
                .await?;
            if result.rows_affected() == 0 {
                // Dropping the transaction rolls back the rows already updated.
                return Err(format!("User with id {} not found", item.id).into());
            }

            sqlx::query(update_idx_query)
                .bind(idx.id)
                .bind(idx.username_hash)
                .bind(idx.email_hash)
                .execute(&mut *transaction)
                .await?;
        }
        transaction.commit().await?;

        debug!(count = items.len(), "Updated users");
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<UserModel> for PgUserGateway {
    async fn update_batch(
        &self,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use clean_core_db::repository::{CreateBatch, FindById, UpdateBatch};
    use heapless::String as HeaplessString;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_update_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        let mut user = gateway.create_batch(vec![create_test_user("updater")]).await?.remove(0);
        user.first_name = HeaplessString::try_from("Renamed").map_err(|_| "name too long")?;
        user.updated_at = Some(Utc::now());
        gateway.update_batch(vec![user.clone()]).await?;

        let stored = gateway.find_by_id(user.id).await?.ok_or("user not found")?;
        assert_eq!(stored.first_name.as_str(), "Renamed");

        assert!(gateway.update_batch(vec![create_test_user("ghost")]).await.is_err());
        Ok(())
    }
}
