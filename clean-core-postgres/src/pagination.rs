//! Translation of a [`Pagination`] into SQL `ORDER BY` / `LIMIT` / `OFFSET`.

use clean_core_api::{Direction, Pagination, PaginationError, PaginationResult, SortOrder};
use sqlx::{Postgres, QueryBuilder};

/// Whitelist mapping sort properties to column names.
///
/// Only mapped columns ever reach the SQL text; sort input is never
/// interpolated.
#[derive(Debug, Clone, Copy)]
pub struct SortColumns {
    columns: &'static [(&'static str, &'static str)],
    tie_breaker: &'static str,
}

impl SortColumns {
    /// `tie_breaker` is a unique column appended to every ordering so that
    /// consecutive pages never overlap.
    pub const fn new(
        columns: &'static [(&'static str, &'static str)],
        tie_breaker: &'static str,
    ) -> Self {
        Self {
            columns,
            tie_breaker,
        }
    }

    pub fn column(&self, property: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, column)| *column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgPageQuery {
    order_by: Vec<(&'static str, Direction)>,
    limit: Option<i64>,
    offset: i64,
}

impl PgPageQuery {
    pub fn from_pagination(pagination: &Pagination, columns: &SortColumns) -> PaginationResult<Self> {
        let mut order_by = Vec::new();
        for order in SortOrder::parse_all(pagination.sort())? {
            let column = columns.column(&order.property).ok_or_else(|| {
                PaginationError::InvalidArgument(format!(
                    "Cannot sort by unknown property '{}'",
                    order.property
                ))
            })?;
            order_by.push((column, order.direction));
        }
        if !order_by.iter().any(|(column, _)| *column == columns.tie_breaker) {
            order_by.push((columns.tie_breaker, Direction::Asc));
        }

        let (limit, offset) = match pagination.as_request() {
            Some(request) => {
                let offset = i64::try_from(request.offset()).map_err(|_| {
                    PaginationError::Precondition(format!(
                        "Offset {} does not fit in BIGINT",
                        request.offset()
                    ))
                })?;
                (Some(i64::from(request.page_size())), offset)
            }
            None => (None, 0),
        };

        Ok(Self {
            order_by,
            limit,
            offset,
        })
    }

    /// Fetch one extra row to detect whether a next window exists.
    pub fn with_probe(mut self) -> Self {
        self.limit = self.limit.map(|limit| limit + 1);
        self
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Append ` ORDER BY ...` and, when paged, ` LIMIT $n OFFSET $m`.
    pub fn push_onto(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" ORDER BY ");
        {
            let mut separated = builder.separated(", ");
            for (column, direction) in &self.order_by {
                separated.push(format!("{column} {}", direction.as_str().to_uppercase()));
            }
        }
        if let Some(limit) = self.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
            builder.push(" OFFSET ");
            builder.push_bind(self.offset);
        }
    }
}
