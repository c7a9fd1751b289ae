use std::fmt;

use serde::Serialize;

use super::chunk::ChunkContent;
use super::paging::Pagination;
use super::slice::SliceContent;
use crate::error::{PaginationError, PaginationResult};

/// A slice that also knows the total number of elements across all pages.
pub trait PageContent<T>: SliceContent<T> {
    /// Number of pages, `1` when the page size is `0`.
    fn total_pages(&self) -> u32;

    fn total_elements(&self) -> u64;
}

/// A page built from a window of content and a total element count.
///
/// # Example
/// ```
/// use clean_core_api::pagination::{PageContent, PaginationRequest, SimplePageContent, SliceContent};
///
/// let request = PaginationRequest::of(0, 3)?;
/// let page = SimplePageContent::new(vec!["a", "b", "c"], request.into(), 10)?;
///
/// assert_eq!(page.total_pages(), 4);
/// assert!(page.has_next());
/// assert_eq!(page.next_pagination().page_number()?, 1);
/// # Ok::<(), clean_core_api::PaginationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SimplePageContent<T> {
    chunk: ChunkContent<T>,
    total_elements: u64,
}

impl<T> SimplePageContent<T> {
    /// Create a page from `content`, the `pagination` used to fetch it and the
    /// total reported by the data source.
    ///
    /// A negative total is rejected. When the content is non-empty and the
    /// window `offset + size` reaches past the reported total, the total is
    /// replaced by `offset + content.len()`: the observed window wins over a
    /// stale count.
    pub fn new(content: Vec<T>, pagination: Pagination, total_elements: i64) -> PaginationResult<Self> {
        let declared = u64::try_from(total_elements).map_err(|_| {
            PaginationError::Precondition("Total elements cannot be negative".to_string())
        })?;

        let total_elements = match pagination.as_request() {
            Some(request)
                if !content.is_empty()
                    && request.offset() + u64::from(request.page_size()) > declared =>
            {
                request.offset() + content.len() as u64
            }
            _ => declared,
        };

        Ok(Self {
            chunk: ChunkContent::new(content, pagination),
            total_elements,
        })
    }

    /// A single unpaged page holding all of `content`.
    pub fn from_content(content: Vec<T>) -> Self {
        let total_elements = content.len() as u64;
        Self {
            chunk: ChunkContent::new(content, Pagination::unpaged()),
            total_elements,
        }
    }

    pub fn empty() -> Self {
        Self::empty_with(Pagination::unpaged())
    }

    pub fn empty_with(pagination: Pagination) -> Self {
        Self {
            chunk: ChunkContent::new(Vec::new(), pagination),
            total_elements: 0,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.chunk.iter()
    }

    pub fn into_content(self) -> Vec<T> {
        self.chunk.into_content()
    }

    pub fn pagination_ref(&self) -> &Pagination {
        self.chunk.pagination_ref()
    }
}

impl<T> Default for SimplePageContent<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> SliceContent<T> for SimplePageContent<T> {
    type Mapped<U> = SimplePageContent<U>;

    fn number(&self) -> u32 {
        self.chunk.number()
    }

    fn size(&self) -> u32 {
        self.chunk.size()
    }

    fn content(&self) -> &[T] {
        self.chunk.content()
    }

    fn sort(&self) -> &[String] {
        self.chunk.sort()
    }

    fn has_next(&self) -> bool {
        u64::from(self.number()) + 1 < u64::from(self.total_pages())
    }

    fn pagination(&self) -> Pagination {
        self.chunk.pagination()
    }

    fn map<U, F>(&self, converter: F) -> SimplePageContent<U>
    where
        F: FnMut(&T) -> U,
    {
        SimplePageContent {
            chunk: self.chunk.convert(converter),
            total_elements: self.total_elements,
        }
    }
}

impl<T> PageContent<T> for SimplePageContent<T> {
    fn total_pages(&self) -> u32 {
        match u64::from(self.size()) {
            0 => 1,
            size => u32::try_from(self.total_elements.div_ceil(size)).unwrap_or(u32::MAX),
        }
    }

    fn total_elements(&self) -> u64 {
        self.total_elements
    }
}

impl<T> IntoIterator for SimplePageContent<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunk.into_iter()
    }
}

impl<T> fmt::Display for SimplePageContent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content_type = if self.has_content() {
            std::any::type_name::<T>()
        } else {
            "UNKNOWN"
        };
        write!(
            f,
            "Page {} of {} containing {} instances",
            u64::from(self.number()) + 1,
            self.total_pages(),
            content_type
        )
    }
}
