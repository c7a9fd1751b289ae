use async_trait::async_trait;
use clean_core_db::models::user::UserModel;
use clean_core_db::repository::find_by_id::FindById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PgUserGateway;
use crate::utils::TryFromRow;

impl PgUserGateway {
    pub(super) async fn find_by_id_impl(
        repo: &PgUserGateway,
        id: Uuid,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT * FROM app_user WHERE id = $1 AND deleted_at IS NULL"#;
        let row = sqlx::query(query).bind(id).fetch_optional(&*repo.pool).await?;
        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<UserModel> for PgUserGateway {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
