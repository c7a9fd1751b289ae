use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::user_status::UserStatus;

/// Incoming user payload for create and update operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestDto {
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 60))]
    pub first_name: String,

    #[validate(length(max = 60))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub username: String,

    #[validate(length(min = 1, max = 150))]
    pub email: String,

    pub status: Option<UserStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> UserRequestDto {
        UserRequestDto {
            first_name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada.lovelace@example.com".to_string(),
            ..UserRequestDto::default()
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_length_limits() {
        let mut dto = request();
        dto.username = "u".repeat(31);
        assert!(dto.validate().is_err());

        let mut dto = request();
        dto.first_name = String::new();
        assert!(dto.validate().is_err());

        let mut dto = request();
        dto.last_name = Some("l".repeat(61));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let dto: UserRequestDto = serde_json::from_str(
            r#"{"firstName":"Ada","username":"ada","email":"ada@example.com","status":"INACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(dto.first_name, "Ada");
        assert_eq!(dto.status, Some(UserStatus::Inactive));
        assert!(dto.last_name.is_none());
    }
}
