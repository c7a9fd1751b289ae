use serde::Serialize;

use super::chunk::ChunkContent;
use super::paging::Pagination;
use super::slice::SliceContent;

/// A window that knows whether more data follows, but not how much.
///
/// Collaborators usually learn this by fetching one element more than the
/// page size; [`SimpleSliceContent::from_probe`] performs that bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SimpleSliceContent<T> {
    chunk: ChunkContent<T>,
    has_next: bool,
}

impl<T> SimpleSliceContent<T> {
    pub fn new(content: Vec<T>, pagination: Pagination, has_next: bool) -> Self {
        Self {
            chunk: ChunkContent::new(content, pagination),
            has_next,
        }
    }

    /// Build a slice from a fetch of up to `page_size + 1` elements.
    ///
    /// The surplus element, when present, only signals that a next window
    /// exists and is dropped. Unpaged fetches never have a next window.
    pub fn from_probe(mut content: Vec<T>, pagination: Pagination) -> Self {
        let has_next = match pagination.as_request() {
            Some(request) => {
                let size = request.page_size() as usize;
                let overflow = content.len() > size;
                content.truncate(size);
                overflow
            }
            None => false,
        };
        Self::new(content, pagination, has_next)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.chunk.iter()
    }

    pub fn into_content(self) -> Vec<T> {
        self.chunk.into_content()
    }
}

impl<T> SliceContent<T> for SimpleSliceContent<T> {
    type Mapped<U> = SimpleSliceContent<U>;

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
        self.has_next
    }

    fn pagination(&self) -> Pagination {
        self.chunk.pagination()
    }

    fn map<U, F>(&self, converter: F) -> SimpleSliceContent<U>
    where
        F: FnMut(&T) -> U,
    {
        SimpleSliceContent {
            chunk: self.chunk.convert(converter),
            has_next: self.has_next,
        }
    }
}
