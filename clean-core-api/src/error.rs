use thiserror::Error;

/// Failures raised by the pagination model.
///
/// The variants keep three situations apart: bad input coming from a caller,
/// an internal contract broken by the code building a result, and a paging
/// operation invoked on a pagination that has no page semantics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid pagination argument: {0}")]
    InvalidArgument(String),

    #[error("Pagination precondition violated: {0}")]
    Precondition(String),

    #[error("Operation not supported on unpaged pagination: {0}")]
    Unsupported(&'static str),
}

pub type PaginationResult<T> = Result<T, PaginationError>;

/// Stable catalog of error codes exposed to API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    RequiredField,
    InternalServerError,
    RequestDtoNull,
    StringCantBeLongerThan,
    StringCantBeShorterThan,
    IntegerCantBeLowerThan,
    NotFound,
    AlreadyExists,
    StringMustBeBetween,
    EmailBlacklisted,
    EmailInvalidAddress,
    EmailLocalPartTooLong,
    EmailTooLong,
    EmailLocalPartTooShort,
}

impl ErrorCode {
    /// Short key, unique within its family (general or email).
    pub fn key(&self) -> &'static str {
        match self {
            ErrorCode::RequiredField => "001",
            ErrorCode::InternalServerError => "002",
            ErrorCode::RequestDtoNull => "003",
            ErrorCode::StringCantBeLongerThan => "004",
            ErrorCode::StringCantBeShorterThan => "005",
            ErrorCode::IntegerCantBeLowerThan => "006",
            ErrorCode::NotFound => "007",
            ErrorCode::AlreadyExists => "008",
            ErrorCode::StringMustBeBetween => "009",
            ErrorCode::EmailBlacklisted => "001",
            ErrorCode::EmailInvalidAddress => "002",
            ErrorCode::EmailLocalPartTooLong => "003",
            ErrorCode::EmailTooLong => "004",
            ErrorCode::EmailLocalPartTooShort => "005",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            ErrorCode::RequiredField => "required.field",
            ErrorCode::InternalServerError => "internal.server_error",
            ErrorCode::RequestDtoNull => "request_dto.null",
            ErrorCode::StringCantBeLongerThan => "string.cant_be_longer_than",
            ErrorCode::StringCantBeShorterThan => "string.cant_be_shorter_than",
            ErrorCode::IntegerCantBeLowerThan => "integer.cant_be_lower_than",
            ErrorCode::NotFound => "not_found",
            ErrorCode::AlreadyExists => "already_exists",
            ErrorCode::StringMustBeBetween => "string.must_be_between",
            ErrorCode::EmailBlacklisted => "email.blacklisted",
            ErrorCode::EmailInvalidAddress => "email.invalid_address",
            ErrorCode::EmailLocalPartTooLong => "email.local_part_too_long",
            ErrorCode::EmailTooLong => "email.email_too_long",
            ErrorCode::EmailLocalPartTooShort => "email.local_part_too_short",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InternalServerError => 500,
            ErrorCode::NotFound | ErrorCode::EmailBlacklisted => 404,
            _ => 400,
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Value for '{field}' is too long (max {max} bytes)")]
    TooLong { field: &'static str, max: usize },

    #[error("Required field missing: {0}")]
    RequiredField(&'static str),

    #[error("Invalid email '{value}': {reason}")]
    InvalidEmail {
        code: ErrorCode,
        value: String,
        reason: &'static str,
    },

    #[error("Not found: {entity} by {field}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Already exists: {entity} with the same {field}")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::ValidationError(_) => ErrorCode::StringMustBeBetween,
            ApiError::TooLong { .. } => ErrorCode::StringCantBeLongerThan,
            ApiError::RequiredField(_) => ErrorCode::RequiredField,
            ApiError::InvalidEmail { code, .. } => *code,
            ApiError::NotFound { .. } => ErrorCode::NotFound,
            ApiError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            ApiError::InternalError(_) | ApiError::DatabaseError(_) => {
                ErrorCode::InternalServerError
            }
            ApiError::Pagination(PaginationError::InvalidArgument(_)) => {
                ErrorCode::IntegerCantBeLowerThan
            }
            ApiError::Pagination(_) => ErrorCode::InternalServerError,
        }
    }

    pub fn http_status(&self) -> u16 {
        self.code().http_status()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_errors_map_to_caller_or_internal_codes() {
        let invalid: ApiError = PaginationError::InvalidArgument("page".into()).into();
        assert_eq!(invalid.http_status(), 400);

        let unsupported: ApiError = PaginationError::Unsupported("page_number").into();
        assert_eq!(unsupported.http_status(), 500);

        let broken: ApiError = PaginationError::Precondition("total".into()).into();
        assert_eq!(broken.code(), ErrorCode::InternalServerError);
    }

    #[test]
    fn test_not_found_message_and_status() {
        let err = ApiError::NotFound {
            entity: "user",
            field: "email",
        };
        assert_eq!(err.to_string(), "Not found: user by email");
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.code().message_key(), "not_found");
    }

    #[test]
    fn test_length_overflow_is_distinct_from_validation_failure() {
        let too_long = ApiError::TooLong {
            field: "username",
            max: 30,
        };
        assert_eq!(too_long.code(), ErrorCode::StringCantBeLongerThan);
        assert_eq!(
            too_long.to_string(),
            "Value for 'username' is too long (max 30 bytes)"
        );

        let invalid = ApiError::ValidationError("username: length".into());
        assert_eq!(invalid.code(), ErrorCode::StringMustBeBetween);
    }

    #[test]
    fn test_email_codes_share_keys_with_general_family() {
        assert_eq!(ErrorCode::EmailLocalPartTooShort.key(), "005");
        assert_eq!(ErrorCode::EmailBlacklisted.http_status(), 404);
        assert_eq!(ErrorCode::EmailTooLong.message_key(), "email.email_too_long");
    }
}
