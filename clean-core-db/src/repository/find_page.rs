use async_trait::async_trait;
use clean_core_api::{Pagination, SimplePageContent};
use tracing::debug;

use crate::repository::fetch_window::FetchWindow;
use crate::repository::GatewayResult;

/// Fetch one page together with its total element count.
///
/// Implemented for every [`FetchWindow`].
#[async_trait]
pub trait FindPage<T>: Send + Sync {
    async fn find_page(&self, pagination: &Pagination) -> GatewayResult<SimplePageContent<T>>;
}

#[async_trait]
impl<T, G> FindPage<T> for G
where
    T: Send + 'static,
    G: FetchWindow<T> + ?Sized,
{
    async fn find_page(&self, pagination: &Pagination) -> GatewayResult<SimplePageContent<T>> {
        let window = self.fetch_window(pagination).await?;
        debug!(
            %pagination,
            fetched = window.content.len(),
            total = ?window.total_elements,
            "Composing page"
        );
        Ok(window.into_page(pagination.clone())?)
    }
}
