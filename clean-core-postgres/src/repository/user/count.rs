use async_trait::async_trait;
use clean_core_db::repository::count::Count;
use std::error::Error;

use super::repo_impl::PgUserGateway;

impl PgUserGateway {
    pub(super) async fn count_impl(repo: &PgUserGateway) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT COUNT(*) FROM app_user WHERE deleted_at IS NULL"#;
        let count: i64 = sqlx::query_scalar(query).fetch_one(&*repo.pool).await?;
        Ok(u64::try_from(count)?)
    }
}

#[async_trait]
impl Count for PgUserGateway {
    async fn count(&self) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::count_impl(self).await
    }
}
