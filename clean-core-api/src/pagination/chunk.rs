use serde::Serialize;

use super::paging::Pagination;
use super::slice::SliceContent;

/// An owned window of content together with the pagination that produced it.
///
/// This is the shared state behind [`SimpleSliceContent`](super::SimpleSliceContent)
/// and [`SimplePageContent`](super::SimplePageContent). On its own a chunk
/// knows nothing about data beyond its window, so [`SliceContent::has_next`]
/// is always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ChunkContent<T> {
    content: Vec<T>,
    pagination: Pagination,
}

impl<T> ChunkContent<T> {
    pub fn new(content: Vec<T>, pagination: Pagination) -> Self {
        Self {
            content,
            pagination,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub(crate) fn convert<U, F>(&self, converter: F) -> ChunkContent<U>
    where
        F: FnMut(&T) -> U,
    {
        ChunkContent {
            content: self.content.iter().map(converter).collect(),
            pagination: self.pagination.clone(),
        }
    }

    pub(crate) fn pagination_ref(&self) -> &Pagination {
        &self.pagination
    }
}

impl<T> SliceContent<T> for ChunkContent<T> {
    type Mapped<U> = ChunkContent<U>;

    fn number(&self) -> u32 {
        self.pagination
            .as_request()
            .map_or(0, |request| request.page_number())
    }

    fn size(&self) -> u32 {
        match self.pagination.as_request() {
            Some(request) => request.page_size(),
            None => u32::try_from(self.content.len()).unwrap_or(u32::MAX),
        }
    }

    fn content(&self) -> &[T] {
        &self.content
    }

    fn sort(&self) -> &[String] {
        self.pagination.sort()
    }

    fn has_next(&self) -> bool {
        false
    }

    fn pagination(&self) -> Pagination {
        self.pagination.clone()
    }

    fn map<U, F>(&self, converter: F) -> ChunkContent<U>
    where
        F: FnMut(&T) -> U,
    {
        self.convert(converter)
    }
}

impl<T> IntoIterator for ChunkContent<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ChunkContent<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
