pub mod user;

use std::error::Error;

use clean_core_api::{ApiError, PaginationError};

/// Convert a gateway failure into an [`ApiError`]; pagination errors keep
/// their kind, anything else is reported as a database error.
pub fn gateway_error(err: Box<dyn Error + Send + Sync>) -> ApiError {
    match err.downcast::<PaginationError>() {
        Ok(pagination) => ApiError::Pagination(*pagination),
        Err(other) => ApiError::DatabaseError(other.to_string()),
    }
}
