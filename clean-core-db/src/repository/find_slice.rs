use async_trait::async_trait;
use clean_core_api::{Pagination, SimpleSliceContent};

use crate::repository::GatewayResult;

/// Fetch one window without counting the total.
///
/// Implementations fetch one row beyond the page size to learn whether a
/// next window exists, see [`SimpleSliceContent::from_probe`].
#[async_trait]
pub trait FindSlice<T>: Send + Sync {
    async fn find_slice(&self, pagination: &Pagination) -> GatewayResult<SimpleSliceContent<T>>;
}
