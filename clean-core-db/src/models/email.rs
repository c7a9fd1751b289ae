use std::fmt;

use clean_core_api::{ApiError, ApiResult, ErrorCode};
use validator::ValidateEmail;

const MAX_LOCAL_PART_LENGTH: usize = 64;
const MIN_LOCAL_PART_LENGTH: usize = 5;
const MAX_EMAIL_LENGTH: usize = 254;

/// A syntactically valid e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> ApiResult<Self> {
        let local_part = value.split('@').next().unwrap_or_default();

        if local_part.len() > MAX_LOCAL_PART_LENGTH {
            return Err(invalid(ErrorCode::EmailLocalPartTooLong, value, "local part is too long"));
        }
        if local_part.len() < MIN_LOCAL_PART_LENGTH {
            return Err(invalid(ErrorCode::EmailLocalPartTooShort, value, "local part is too short"));
        }
        if value.len() > MAX_EMAIL_LENGTH {
            return Err(invalid(ErrorCode::EmailTooLong, value, "address is too long"));
        }
        if !value.validate_email() {
            return Err(invalid(ErrorCode::EmailInvalidAddress, value, "address is malformed"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(code: ErrorCode, value: &str, reason: &'static str) -> ApiError {
    ApiError::InvalidEmail {
        code,
        value: value.to_string(),
        reason,
    }
}
