use async_trait::async_trait;
use clean_core_api::Pagination;
use clean_core_db::models::user::UserModel;
use clean_core_db::repository::count::Count;
use clean_core_db::repository::fetch_window::{FetchWindow, Window};
use std::error::Error;
use tracing::{debug, instrument};

use super::repo_impl::PgUserGateway;

impl PgUserGateway {
    pub(super) async fn fetch_window_impl(
        repo: &PgUserGateway,
        pagination: &Pagination,
    ) -> Result<Window<UserModel>, Box<dyn Error + Send + Sync>> {
        let content = repo.fetch_live_users(pagination, false).await?;
        if pagination.is_unpaged() {
            return Ok(Window::uncounted(content));
        }

        let total = repo.count().await?;
        debug!(fetched = content.len(), total, "Fetched user window");
        Ok(Window::new(content, total))
    }
}

#[async_trait]
impl FetchWindow<UserModel> for PgUserGateway {
    #[instrument(skip_all, fields(pagination = %pagination))]
    async fn fetch_window(
        &self,
        pagination: &Pagination,
    ) -> Result<Window<UserModel>, Box<dyn Error + Send + Sync>> {
        Self::fetch_window_impl(self, pagination).await
    }
}
