use async_trait::async_trait;
use clean_core_api::{Pagination, SimpleSliceContent};
use clean_core_db::models::user::UserModel;
use clean_core_db::repository::find_slice::FindSlice;
use std::error::Error;

use super::repo_impl::PgUserGateway;

#[async_trait]
impl FindSlice<UserModel> for PgUserGateway {
    async fn find_slice(
        &self,
        pagination: &Pagination,
    ) -> Result<SimpleSliceContent<UserModel>, Box<dyn Error + Send + Sync>> {
        let content = self.fetch_live_users(pagination, true).await?;
        Ok(SimpleSliceContent::from_probe(content, pagination.clone()))
    }
}
