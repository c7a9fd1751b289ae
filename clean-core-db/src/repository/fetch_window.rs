use async_trait::async_trait;
use clean_core_api::{Pagination, PaginationError, PaginationResult, SimplePageContent};

use crate::repository::GatewayResult;

/// Content fetched for one pagination, as handed back by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<T> {
    /// Elements in data source order.
    pub content: Vec<T>,
    /// Total across all pages, when the data source counted it.
    pub total_elements: Option<u64>,
}

impl<T> Window<T> {
    pub fn new(content: Vec<T>, total_elements: u64) -> Self {
        Self {
            content,
            total_elements: Some(total_elements),
        }
    }

    /// A window whose total was not counted.
    pub fn uncounted(content: Vec<T>) -> Self {
        Self {
            content,
            total_elements: None,
        }
    }

    /// Compose the page described by this window.
    ///
    /// Without a counted total the page ends at the observed window, that is
    /// `offset + content.len()` for paged requests and `content.len()` otherwise.
    pub fn into_page(self, pagination: Pagination) -> PaginationResult<SimplePageContent<T>> {
        let total = match self.total_elements {
            Some(total) => total,
            None => {
                let offset = pagination.as_request().map_or(0, |request| request.offset());
                offset + self.content.len() as u64
            }
        };
        let total = i64::try_from(total).map_err(|_| {
            PaginationError::Precondition(format!("Total elements {total} does not fit in i64"))
        })?;
        SimplePageContent::new(self.content, pagination, total)
    }
}

/// The external fetch boundary: given a pagination, return the ordered
/// window and optionally the total element count.
///
/// Implementations must honor the pagination's sort clauses and return an
/// invalid-argument error for properties they cannot sort on.
#[async_trait]
pub trait FetchWindow<T>: Send + Sync {
    async fn fetch_window(&self, pagination: &Pagination) -> GatewayResult<Window<T>>;
}
