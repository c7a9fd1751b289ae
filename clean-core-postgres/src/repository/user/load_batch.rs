use async_trait::async_trait;
use clean_core_db::models::user::UserModel;
use clean_core_db::repository::load_batch::LoadBatch;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PgUserGateway;
use crate::utils::TryFromRow;

impl PgUserGateway {
    pub(super) async fn load_batch_impl(
        repo: &PgUserGateway,
        ids: &[Uuid],
    ) -> Result<Vec<Option<UserModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM app_user WHERE id = ANY($1)"#;
        let rows = sqlx::query(query).bind(ids).fetch_all(&*repo.pool).await?;

        let mut item_map = std::collections::HashMap::new();
        for row in rows {
            let item = UserModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(item_map.remove(id));
        }
        Ok(result)
    }
}

#[async_trait]
impl LoadBatch<UserModel> for PgUserGateway {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<UserModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
