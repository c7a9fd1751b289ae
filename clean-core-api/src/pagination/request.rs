use std::fmt;

use serde::Serialize;

use crate::error::{PaginationError, PaginationResult};

/// A paged request: zero-based page number, page size and sort clauses.
///
/// Values are immutable. Every navigation method returns a new request with
/// the same size and sort.
///
/// # Example
/// ```
/// use clean_core_api::pagination::PaginationRequest;
///
/// let request = PaginationRequest::of(2, 10)?.with_sort(["name,asc"]);
/// assert_eq!(request.offset(), 20);
/// assert_eq!(request.next().page_number(), 3);
/// # Ok::<(), clean_core_api::PaginationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    page_number: u32,
    page_size: u32,
    sort: Vec<String>,
}

impl PaginationRequest {
    /// Create an unsorted request
    ///
    /// # Arguments
    /// * `page_number` - Zero-based page number, must not be negative
    /// * `page_size` - Number of items per page, must be greater than zero
    pub fn of(page_number: i64, page_size: i64) -> PaginationResult<Self> {
        Self::of_sorted(page_number, page_size, Vec::<String>::new())
    }

    /// Create a request sorted by the given `"field,direction"` clauses
    pub fn of_sorted<I, S>(page_number: i64, page_size: i64, sort: I) -> PaginationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if page_number < 0 {
            return Err(PaginationError::InvalidArgument(
                "Page number must be greater than or equal to zero".to_string(),
            ));
        }
        if page_size <= 0 {
            return Err(PaginationError::InvalidArgument(
                "Page size must be greater than zero".to_string(),
            ));
        }
        let page_number = u32::try_from(page_number).map_err(|_| {
            PaginationError::InvalidArgument(format!("Page number {page_number} is too large"))
        })?;
        let page_size = u32::try_from(page_size).map_err(|_| {
            PaginationError::InvalidArgument(format!("Page size {page_size} is too large"))
        })?;

        Ok(Self {
            page_number,
            page_size,
            sort: sort.into_iter().map(Into::into).collect(),
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first element of this page, computed in 64 bits.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }

    pub fn sort(&self) -> &[String] {
        &self.sort
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }

    pub fn next(&self) -> Self {
        self.with_page(self.page_number.saturating_add(1))
    }

    /// The previous page, or this page when already on the first one.
    pub fn previous(&self) -> Self {
        self.with_page(self.page_number.saturating_sub(1))
    }

    pub fn first(&self) -> Self {
        self.with_page(0)
    }

    pub fn with_page(&self, page_number: u32) -> Self {
        Self {
            page_number,
            page_size: self.page_size,
            sort: self.sort.clone(),
        }
    }

    pub fn with_sort<I, S>(&self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            page_number: self.page_number,
            page_size: self.page_size,
            sort: sort.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for PaginationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page request [number: {}, size {}, sort: [{}]]",
            self.page_number,
            self.page_size,
            self.sort.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_page_number() {
        let err = PaginationRequest::of(-1, 10).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidArgument(_)));
    }

    #[test]
    fn test_rejects_non_positive_page_size() {
        assert!(matches!(
            PaginationRequest::of(0, 0),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            PaginationRequest::of(0, -5),
            Err(PaginationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_values_beyond_u32() {
        assert!(PaginationRequest::of(i64::from(u32::MAX) + 1, 10).is_err());
        assert!(PaginationRequest::of(0, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let request = PaginationRequest::of(i64::from(u32::MAX), i64::from(u32::MAX)).unwrap();
        assert_eq!(request.offset(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_navigation_keeps_size_and_sort() {
        let request = PaginationRequest::of_sorted(3, 25, ["name,desc"]).unwrap();

        let next = request.next();
        assert_eq!(next.page_number(), 4);
        assert_eq!(next.page_size(), 25);
        assert_eq!(next.sort(), ["name,desc".to_string()]);

        assert_eq!(request.previous().page_number(), 2);
        assert_eq!(request.first().page_number(), 0);
        assert_eq!(request.with_page(9).page_number(), 9);
    }

    #[test]
    fn test_previous_is_clamped_at_first_page() {
        let mut request = PaginationRequest::of(2, 5).unwrap();
        for _ in 0..5 {
            request = request.previous();
        }
        assert_eq!(request.page_number(), 0);
        assert!(!request.has_previous());
        assert_eq!(request.previous(), request);
    }

    #[test]
    fn test_with_sort_round_trip_and_equality() {
        let a = PaginationRequest::of(2, 10).unwrap().with_sort(["name,asc"]);
        let b = PaginationRequest::of_sorted(2, 10, vec!["name,asc".to_string()]).unwrap();

        assert_eq!(a.page_number(), 2);
        assert_eq!(a.page_size(), 10);
        assert_eq!(a.sort(), ["name,asc".to_string()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let request = PaginationRequest::of_sorted(1, 20, ["name,asc", "email,desc"]).unwrap();
        assert_eq!(
            request.to_string(),
            "Page request [number: 1, size 20, sort: [name,asc, email,desc]]"
        );
    }
}
