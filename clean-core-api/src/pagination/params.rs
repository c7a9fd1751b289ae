use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paging::Pagination;
use super::request::PaginationRequest;
use super::sort::SortOrder;
use crate::error::{PaginationError, PaginationResult};

/// Defaults applied when turning external paging parameters into a [`Pagination`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// When neither page nor size is supplied, fetch everything instead of
    /// the first page.
    pub unpaged_by_default: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 1000,
            unpaged_by_default: false,
        }
    }
}

/// Paging parameters as a presentation layer receives them, e.g. from
/// `?page=2&size=10&sort=name,asc&sort=email,desc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Vec<String>,
}

impl PaginationParams {
    pub fn into_pagination(self, config: &PaginationConfig) -> PaginationResult<Pagination> {
        for clause in &self.sort {
            clause.parse::<SortOrder>()?;
        }

        if self.page.is_none() && self.size.is_none() && config.unpaged_by_default {
            return Ok(Pagination::unpaged_sorted(self.sort));
        }

        let page = self.page.unwrap_or(0);
        let mut size = self.size.unwrap_or(i64::from(config.default_page_size));
        if size > i64::from(config.max_page_size) {
            debug!(requested = size, max = config.max_page_size, "Clamping page size");
            size = i64::from(config.max_page_size);
        }
        if size <= 0 {
            return Err(PaginationError::InvalidArgument(format!(
                "Page size must be greater than zero, got {size}"
            )));
        }

        PaginationRequest::of_sorted(page, size, self.sort).map(Pagination::Paged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_page() {
        let pagination = PaginationParams::default()
            .into_pagination(&PaginationConfig::default())
            .unwrap();

        assert_eq!(pagination.page_number(), Ok(0));
        assert_eq!(pagination.page_size(), Ok(20));
    }

    #[test]
    fn test_unpaged_by_default_keeps_sort() {
        let config = PaginationConfig {
            unpaged_by_default: true,
            ..PaginationConfig::default()
        };
        let params = PaginationParams {
            sort: vec!["name,desc".to_string()],
            ..PaginationParams::default()
        };

        let pagination = params.into_pagination(&config).unwrap();
        assert_eq!(pagination, Pagination::unpaged_sorted(["name,desc"]));
    }

    #[test]
    fn test_size_is_clamped_to_maximum() {
        let params = PaginationParams {
            page: Some(3),
            size: Some(50_000),
            sort: Vec::new(),
        };

        let pagination = params.into_pagination(&PaginationConfig::default()).unwrap();
        assert_eq!(pagination.page_number(), Ok(3));
        assert_eq!(pagination.page_size(), Ok(1000));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let config = PaginationConfig::default();

        let negative_page = PaginationParams {
            page: Some(-1),
            ..PaginationParams::default()
        };
        assert!(matches!(
            negative_page.into_pagination(&config),
            Err(PaginationError::InvalidArgument(_))
        ));

        let zero_size = PaginationParams {
            size: Some(0),
            ..PaginationParams::default()
        };
        assert!(zero_size.into_pagination(&config).is_err());

        let bad_sort = PaginationParams {
            sort: vec!["name,upwards".to_string()],
            ..PaginationParams::default()
        };
        assert!(bad_sort.into_pagination(&config).is_err());
    }

    #[test]
    fn test_deserializes_from_json() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page": 1, "size": 5, "sort": ["username,asc"]}"#).unwrap();
        let pagination = params.into_pagination(&PaginationConfig::default()).unwrap();

        assert_eq!(pagination.offset(), Ok(5));
        assert_eq!(pagination.sort(), ["username,asc".to_string()]);
    }
}
