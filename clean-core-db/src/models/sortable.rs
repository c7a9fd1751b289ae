use std::cmp::Ordering;

use clean_core_api::{PaginationError, PaginationResult, SortOrder};

/// Models that can be ordered by named properties, as requested by sort
/// clauses such as `"username,asc"`.
pub trait SortableModel {
    /// Property names accepted in sort clauses.
    const SORTABLE_PROPERTIES: &'static [&'static str];

    /// Compare two models by one property. Only called with names from
    /// [`SortableModel::SORTABLE_PROPERTIES`].
    fn compare_by(&self, other: &Self, property: &str) -> Ordering;
}

/// Parse `clauses` and check that every property can be sorted on.
pub fn parse_sort<T: SortableModel>(clauses: &[String]) -> PaginationResult<Vec<SortOrder>> {
    let orders = SortOrder::parse_all(clauses)?;
    if let Some(unknown) = orders
        .iter()
        .find(|order| !T::SORTABLE_PROPERTIES.contains(&order.property.as_str()))
    {
        return Err(PaginationError::InvalidArgument(format!(
            "Cannot sort by unknown property '{}'",
            unknown.property
        )));
    }
    Ok(orders)
}

/// Stable in-place sort following the clauses in order of precedence.
pub fn sort_models<T: SortableModel>(items: &mut [T], clauses: &[String]) -> PaginationResult<()> {
    let orders = parse_sort::<T>(clauses)?;
    if orders.is_empty() {
        return Ok(());
    }
    items.sort_by(|a, b| {
        orders
            .iter()
            .map(|order| {
                let ordering = a.compare_by(b, &order.property);
                if order.direction.is_ascending() {
                    ordering
                } else {
                    ordering.reverse()
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    Ok(())
}
