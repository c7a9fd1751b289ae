use super::paging::Pagination;
use super::request::PaginationRequest;

/// A realized window of an ordered sequence, with enough metadata to request
/// the adjacent windows.
///
/// A slice does not know how many elements exist in total; see
/// [`PageContent`](super::PageContent) for windows that do.
///
/// Navigation never contacts the data source. When there is no adjacent
/// window, [`next_pagination`](SliceContent::next_pagination) and
/// [`previous_pagination`](SliceContent::previous_pagination) hand back
/// [`Pagination::unpaged`] instead of failing, so callers should check
/// [`has_next`](SliceContent::has_next) / [`has_previous`](SliceContent::has_previous)
/// first.
pub trait SliceContent<T> {
    /// The type produced by [`map`](SliceContent::map).
    type Mapped<U>: SliceContent<U>;

    /// Page index when paged, `0` otherwise.
    fn number(&self) -> u32;

    /// Configured page size when paged, the content count otherwise.
    fn size(&self) -> u32;

    /// Elements in the order supplied when the window was built.
    fn content(&self) -> &[T];

    fn sort(&self) -> &[String];

    fn has_next(&self) -> bool;

    /// Number of elements actually present, which may be less than
    /// [`size`](SliceContent::size) on the last window.
    fn number_of_elements(&self) -> usize {
        self.content().len()
    }

    fn has_content(&self) -> bool {
        !self.content().is_empty()
    }

    fn has_previous(&self) -> bool {
        self.number() > 0
    }

    fn is_first(&self) -> bool {
        !self.has_previous()
    }

    fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// The pagination that produced this window.
    ///
    /// The default rebuilds it from number, size and sort; a window with a
    /// size of zero has no page semantics and reports an unpaged pagination.
    fn pagination(&self) -> Pagination {
        let sort = self.sort().to_vec();
        match PaginationRequest::of_sorted(i64::from(self.number()), i64::from(self.size()), sort) {
            Ok(request) => Pagination::Paged(request),
            Err(_) => Pagination::unpaged_sorted(self.sort().to_vec()),
        }
    }

    fn next_pagination(&self) -> Pagination {
        if self.has_next() {
            self.pagination().next()
        } else {
            Pagination::unpaged()
        }
    }

    fn previous_pagination(&self) -> Pagination {
        if self.has_previous() {
            self.pagination().previous_or_first()
        } else {
            Pagination::unpaged()
        }
    }

    /// The next window's pagination, or this window's own when it is the last.
    fn next_or_last_pagination(&self) -> Pagination {
        if self.has_next() {
            self.next_pagination()
        } else {
            self.pagination()
        }
    }

    /// The previous window's pagination, or this window's own when it is the first.
    fn previous_or_first_pagination(&self) -> Pagination {
        if self.has_previous() {
            self.previous_pagination()
        } else {
            self.pagination()
        }
    }

    /// Convert every element, keeping all pagination metadata.
    fn map<U, F>(&self, converter: F) -> Self::Mapped<U>
    where
        F: FnMut(&T) -> U;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A window owned by some other framework, adapted by reading its fields.
    struct ForeignWindow {
        page: u32,
        size: u32,
        sort: Vec<String>,
        items: Vec<u8>,
        more: bool,
    }

    impl SliceContent<u8> for ForeignWindow {
        type Mapped<U> = Vec<U>;

        fn number(&self) -> u32 {
            self.page
        }

        fn size(&self) -> u32 {
            self.size
        }

        fn content(&self) -> &[u8] {
            &self.items
        }

        fn sort(&self) -> &[String] {
            &self.sort
        }

        fn has_next(&self) -> bool {
            self.more
        }

        fn map<U, F>(&self, converter: F) -> Vec<U>
        where
            F: FnMut(&u8) -> U,
        {
            self.items.iter().map(converter).collect()
        }
    }

    impl<T> SliceContent<T> for Vec<T> {
        type Mapped<U> = Vec<U>;

        fn number(&self) -> u32 {
            0
        }

        fn size(&self) -> u32 {
            self.len() as u32
        }

        fn content(&self) -> &[T] {
            self
        }

        fn sort(&self) -> &[String] {
            &[]
        }

        fn has_next(&self) -> bool {
            false
        }

        fn map<U, F>(&self, converter: F) -> Vec<U>
        where
            F: FnMut(&T) -> U,
        {
            self.iter().map(converter).collect()
        }
    }

    fn window(page: u32, size: u32, more: bool) -> ForeignWindow {
        ForeignWindow {
            page,
            size,
            sort: vec!["name,asc".to_string()],
            items: vec![1, 2],
            more,
        }
    }

    #[test]
    fn test_default_pagination_is_rebuilt_from_window() {
        let pagination = window(2, 5, true).pagination();
        let expected: Pagination = PaginationRequest::of_sorted(2, 5, ["name,asc"]).unwrap().into();
        assert_eq!(pagination, expected);
    }

    #[test]
    fn test_zero_sized_window_reports_unpaged() {
        let pagination = window(0, 0, false).pagination();
        assert_eq!(pagination, Pagination::unpaged_sorted(["name,asc"]));
    }

    #[test]
    fn test_default_navigation() {
        let middle = window(1, 5, true);
        assert_eq!(middle.next_pagination().page_number(), Ok(2));
        assert_eq!(middle.previous_pagination().page_number(), Ok(0));
        assert!(!middle.is_first());
        assert!(!middle.is_last());

        let last = window(1, 5, false);
        assert_eq!(last.next_pagination(), Pagination::unpaged());
        assert_eq!(last.next_or_last_pagination(), last.pagination());

        let first = window(0, 5, true);
        assert_eq!(first.previous_pagination(), Pagination::unpaged());
        assert_eq!(first.previous_or_first_pagination(), first.pagination());
    }

    #[test]
    fn test_default_counts() {
        let w = window(0, 5, false);
        assert_eq!(w.number_of_elements(), 2);
        assert!(w.has_content());
        assert_eq!(w.map(|b| u32::from(*b) * 2), vec![2, 4]);
    }
}
