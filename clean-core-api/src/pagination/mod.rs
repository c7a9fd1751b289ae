//! Framework-agnostic pagination model.
//!
//! A [`Pagination`] describes which window of an ordered sequence to fetch.
//! A data source answers with a [`SliceContent`] (window only) or a
//! [`PageContent`] (window plus total count). Results are immutable; callers
//! derive the pagination of adjacent windows from them and use `map` to change
//! the element type without losing any metadata.

pub mod chunk;
pub mod page;
pub mod paging;
pub mod params;
pub mod request;
pub mod simple_slice;
pub mod slice;
pub mod sort;
pub mod unpaged;

// Re-exports
pub use chunk::ChunkContent;
pub use page::{PageContent, SimplePageContent};
pub use paging::Pagination;
pub use params::{PaginationConfig, PaginationParams};
pub use request::PaginationRequest;
pub use simple_slice::SimpleSliceContent;
pub use slice::SliceContent;
pub use sort::{Direction, SortOrder};
pub use unpaged::Unpaged;
