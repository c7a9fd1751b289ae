use async_trait::async_trait;
use clean_core_db::models::user::UserModel;
use clean_core_db::repository::gateway::UserGateway;
use clean_core_db::utils::{email_hash, hash_as_i64};
use std::error::Error;

use super::repo_impl::PgUserGateway;
use crate::utils::TryFromRow;

impl PgUserGateway {
    /// Live users whose index row carries the given hash in `column`.
    async fn find_live_by_hash(
        &self,
        column: &'static str,
        hash: i64,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT u.* FROM app_user u JOIN app_user_idx i ON i.id = u.id \
             WHERE i.{column} = $1 AND u.deleted_at IS NULL"
        );
        let rows = sqlx::query(&query).bind(hash).fetch_all(&*self.pool).await?;
        rows.iter().map(UserModel::try_from_row).collect()
    }

    pub(super) async fn find_by_username_impl(
        repo: &PgUserGateway,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let candidates = repo
            .find_live_by_hash("username_hash", hash_as_i64(username)?)
            .await?;
        // Hashes can collide; confirm on the stored value.
        Ok(candidates
            .into_iter()
            .find(|user| user.username.as_str() == username))
    }

    pub(super) async fn find_by_email_impl(
        repo: &PgUserGateway,
        email: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let wanted = email.trim();
        let candidates = repo
            .find_live_by_hash("email_hash", email_hash(wanted)?)
            .await?;
        Ok(candidates
            .into_iter()
            .find(|user| user.email.as_str().eq_ignore_ascii_case(wanted)))
    }
}

#[async_trait]
impl UserGateway for PgUserGateway {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_username_impl(self, username).await
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_email_impl(self, email).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use clean_core_db::repository::{CreateBatch, UpdateBatch, UserGateway};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_find_by_username_and_email() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        let mut user = gateway.create_batch(vec![create_test_user("lookup")]).await?.remove(0);

        let by_username = gateway.find_by_username("lookup").await?;
        assert_eq!(by_username.map(|u| u.id), Some(user.id));
        let by_email = gateway.find_by_email("LOOKUP@example.com").await?;
        assert_eq!(by_email.map(|u| u.id), Some(user.id));
        assert!(gateway.find_by_username("nobody").await?.is_none());

        user.deleted_at = Some(Utc::now());
        gateway.update_batch(vec![user]).await?;
        assert!(gateway.find_by_username("lookup").await?.is_none());
        Ok(())
    }
}
