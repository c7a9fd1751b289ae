use std::fmt;

use serde::Serialize;

use super::request::PaginationRequest;
use super::unpaged::Unpaged;
use crate::error::{PaginationError, PaginationResult};

/// Describes which window of an ordered sequence to fetch.
///
/// A pagination is either [`Pagination::Paged`], addressing one page of a
/// fixed size, or [`Pagination::Unpaged`], asking for the whole sequence.
/// Both shapes may carry sort clauses in `"field,direction"` form.
///
/// Accessors that only make sense for a page (`page_number`, `page_size`,
/// `offset`) return [`PaginationError::Unsupported`] on the unpaged shape so
/// callers can tell "no page semantics" apart from bad input.
///
/// # Example
/// ```
/// use clean_core_api::pagination::Pagination;
///
/// let first = Pagination::of_size(20)?;
/// let second = first.next();
/// assert_eq!(second.offset()?, 20);
///
/// let all = Pagination::unpaged();
/// assert!(all.page_number().is_err());
/// assert_eq!(all.next(), all);
/// # Ok::<(), clean_core_api::PaginationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Pagination {
    Paged(PaginationRequest),
    Unpaged(Unpaged),
}

impl Pagination {
    pub fn unpaged() -> Self {
        Pagination::Unpaged(Unpaged::default())
    }

    pub fn unpaged_sorted<I, S>(sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pagination::Unpaged(Unpaged::sorted(sort))
    }

    /// First page of the given size, unsorted.
    pub fn of_size(page_size: i64) -> PaginationResult<Self> {
        PaginationRequest::of(0, page_size).map(Pagination::Paged)
    }

    pub fn is_paged(&self) -> bool {
        matches!(self, Pagination::Paged(_))
    }

    pub fn is_unpaged(&self) -> bool {
        !self.is_paged()
    }

    pub fn page_number(&self) -> PaginationResult<u32> {
        match self {
            Pagination::Paged(request) => Ok(request.page_number()),
            Pagination::Unpaged(_) => Err(PaginationError::Unsupported("page_number")),
        }
    }

    pub fn page_size(&self) -> PaginationResult<u32> {
        match self {
            Pagination::Paged(request) => Ok(request.page_size()),
            Pagination::Unpaged(_) => Err(PaginationError::Unsupported("page_size")),
        }
    }

    pub fn offset(&self) -> PaginationResult<u64> {
        match self {
            Pagination::Paged(request) => Ok(request.offset()),
            Pagination::Unpaged(_) => Err(PaginationError::Unsupported("offset")),
        }
    }

    pub fn sort(&self) -> &[String] {
        match self {
            Pagination::Paged(request) => request.sort(),
            Pagination::Unpaged(unpaged) => unpaged.sort(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Pagination::Paged(request) => Pagination::Paged(request.next()),
            Pagination::Unpaged(_) => self.clone(),
        }
    }

    /// The previous page, or the first page when there is none before this one.
    pub fn previous_or_first(&self) -> Self {
        match self {
            Pagination::Paged(request) if request.has_previous() => {
                Pagination::Paged(request.previous())
            }
            _ => self.first(),
        }
    }

    pub fn first(&self) -> Self {
        match self {
            Pagination::Paged(request) => Pagination::Paged(request.first()),
            Pagination::Unpaged(_) => self.clone(),
        }
    }

    /// Move to `page_number`. An unpaged pagination only accepts page `0`.
    pub fn with_page(&self, page_number: u32) -> PaginationResult<Self> {
        match self {
            Pagination::Paged(request) => Ok(Pagination::Paged(request.with_page(page_number))),
            Pagination::Unpaged(_) if page_number == 0 => Ok(self.clone()),
            Pagination::Unpaged(_) => Err(PaginationError::Unsupported("with_page")),
        }
    }

    pub fn has_previous(&self) -> bool {
        match self {
            Pagination::Paged(request) => request.has_previous(),
            Pagination::Unpaged(_) => false,
        }
    }

    /// The paged request, if this pagination has one.
    pub fn as_request(&self) -> Option<&PaginationRequest> {
        match self {
            Pagination::Paged(request) => Some(request),
            Pagination::Unpaged(_) => None,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::unpaged()
    }
}

impl From<PaginationRequest> for Pagination {
    fn from(request: PaginationRequest) -> Self {
        Pagination::Paged(request)
    }
}

impl From<Unpaged> for Pagination {
    fn from(unpaged: Unpaged) -> Self {
        Pagination::Unpaged(unpaged)
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pagination::Paged(request) => fmt::Display::fmt(request, f),
            Pagination::Unpaged(unpaged) => {
                write!(f, "Unpaged [sort: [{}]]", unpaged.sort().join(", "))
            }
        }
    }
}
