use serde::{Deserialize, Serialize};

use crate::pagination::{PageContent, SimplePageContent, SliceContent};

/// The serializable view of a page handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponseDto<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub first: bool,
    pub last: bool,
    pub sort: Vec<String>,
}

impl<T> PaginatedResponseDto<T> {
    /// Snapshot any page, cloning its content.
    pub fn from_page<P>(page: &P) -> Self
    where
        P: PageContent<T>,
        T: Clone,
    {
        Self {
            content: page.content().to_vec(),
            page_number: page.number(),
            page_size: page.size(),
            total_pages: page.total_pages(),
            total_elements: page.total_elements(),
            first: page.is_first(),
            last: page.is_last(),
            sort: page.sort().to_vec(),
        }
    }
}

impl<T> From<SimplePageContent<T>> for PaginatedResponseDto<T> {
    fn from(page: SimplePageContent<T>) -> Self {
        let page_number = page.number();
        let page_size = page.size();
        let total_pages = page.total_pages();
        let total_elements = page.total_elements();
        let first = page.is_first();
        let last = page.is_last();
        let sort = page.sort().to_vec();

        Self {
            content: page.into_content(),
            page_number,
            page_size,
            total_pages,
            total_elements,
            first,
            last,
            sort,
        }
    }
}
