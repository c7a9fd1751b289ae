use async_trait::async_trait;
use clean_core_db::models::user::UserModel;
use clean_core_db::models::Indexable;
use clean_core_db::repository::create_batch::CreateBatch;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PgUserGateway;

impl PgUserGateway {
    pub(super) async fn create_batch_impl(
        repo: &PgUserGateway,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let insert_query = r#"
            INSERT INTO app_user (
                id, first_name, last_name, username, email, status,
                created_at, updated_at, deleted_at, disabled_at, last_login_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#;
        let insert_idx_query = r#"
            INSERT INTO app_user_idx (id, username_hash, email_hash) VALUES ($1, $2, $3)
        "#;

        let mut transaction = repo.pool.begin().await?;
        for item in &items {
            item.validate()?;
            let idx = item.to_index()?;

            sqlx::query(insert_query)
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

            sqlx::query(insert_idx_query)
                .bind(idx.id)
                .bind(idx.username_hash)
                .bind(idx.email_hash)
                .execute(&mut *transaction)
                .await?;
        }
        transaction.commit().await?;

        debug!(count = items.len(), "Created users");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<UserModel> for PgUserGateway {
    async fn create_batch(
        &self,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use clean_core_db::repository::{Count, CreateBatch};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_create_batch_is_atomic() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        let first = create_test_user("creator");
        let saved = gateway.create_batch(vec![first.clone()]).await?;
        assert_eq!(saved, vec![first.clone()]);

        // The duplicate primary key fails the whole batch.
        let result = gateway
            .create_batch(vec![create_test_user("another"), first])
            .await;
        assert!(result.is_err());
        assert_eq!(gateway.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_create_batch_rejects_taken_username_or_email(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        gateway.create_batch(vec![create_test_user("alice")]).await?;

        let mut namesake = create_test_user("alice");
        namesake.email = "other.alice@example.com".try_into().map_err(|_| "email too long")?;
        assert!(gateway.create_batch(vec![namesake]).await.is_err());

        let mut shouting = create_test_user("alicia");
        shouting.email = "ALICE@example.com".try_into().map_err(|_| "email too long")?;
        assert!(gateway.create_batch(vec![shouting]).await.is_err());

        assert_eq!(gateway.count().await?, 1);
        Ok(())
    }
}
