use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use clean_core_api::{ApiError, ApiResult, UserRequestDto, UserResponseDto, UserStatus};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Auditable, Email, Identifiable, Index, Indexable, NonDeletable, SortableModel};
use crate::utils::{email_hash, hash_as_i64};

/// # Documentation
/// - Application user, soft-deleted through `deleted_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,

    pub first_name: HeaplessString<60>,
    pub last_name: Option<HeaplessString<60>>,
    pub username: HeaplessString<30>,
    pub email: HeaplessString<150>,

    pub status: UserStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdxModel {
    pub id: Uuid,

    pub username_hash: i64,
    pub email_hash: i64,
}

impl UserModel {
    /// Build a model from an incoming request, generating an id and creation
    /// time when the request carries none.
    pub fn from_request(dto: &UserRequestDto) -> ApiResult<Self> {
        dto.validate()?;

        let model = UserModel {
            id: dto.id.unwrap_or_else(Uuid::new_v4),
            first_name: bounded("firstName", &dto.first_name)?,
            last_name: dto
                .last_name
                .as_deref()
                .map(|value| bounded("lastName", value))
                .transpose()?,
            username: bounded("username", &dto.username)?,
            email: bounded("email", &dto.email)?,
            status: dto.status.unwrap_or_default(),
            created_at: dto.created_at.unwrap_or_else(Utc::now),
            updated_at: dto.updated_at,
            deleted_at: dto.deleted_at,
            disabled_at: dto.disabled_at,
            last_login_at: dto.last_login_at,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> ApiResult<()> {
        if self.first_name.is_empty() {
            return Err(ApiError::RequiredField("firstName"));
        }
        if self.username.is_empty() {
            return Err(ApiError::RequiredField("username"));
        }
        if self.email.is_empty() {
            return Err(ApiError::RequiredField("email"));
        }
        Email::parse(&self.email)?;
        Ok(())
    }

    /// Outbound view of the user. Usable as a mapper, e.g. `page.map(UserModel::to_response)`.
    pub fn to_response(&self) -> UserResponseDto {
        UserResponseDto {
            id: self.id.to_string(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.as_ref().map(|s| s.to_string()),
            username: self.username.to_string(),
            email: self.email.to_string(),
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
            disabled_at: self.disabled_at,
            last_login_at: self.last_login_at,
        }
    }
}

// Validator limits count chars, storage limits count bytes.
fn bounded<const N: usize>(field: &'static str, value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::try_from(value).map_err(|_| ApiError::TooLong { field, max: N })
}

impl From<&UserModel> for UserResponseDto {
    fn from(model: &UserModel) -> Self {
        model.to_response()
    }
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for UserModel {
    fn get_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn get_updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl NonDeletable for UserModel {
    fn get_deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Indexable for UserModel {
    type IndexType = UserIdxModel;

    fn to_index(&self) -> Result<Self::IndexType, String> {
        Ok(UserIdxModel {
            id: self.id,
            username_hash: hash_as_i64(self.username.as_str())?,
            email_hash: email_hash(&self.email)?,
        })
    }
}

impl SortableModel for UserModel {
    const SORTABLE_PROPERTIES: &'static [&'static str] = &[
        "id",
        "firstName",
        "lastName",
        "username",
        "email",
        "status",
        "createdAt",
        "updatedAt",
        "lastLoginAt",
    ];

    fn compare_by(&self, other: &Self, property: &str) -> Ordering {
        match property {
            "id" => self.id.cmp(&other.id),
            "firstName" => self.first_name.cmp(&other.first_name),
            "lastName" => self.last_name.cmp(&other.last_name),
            "username" => self.username.cmp(&other.username),
            "email" => self.email.cmp(&other.email),
            "status" => self.status.key().cmp(other.status.key()),
            "createdAt" => self.created_at.cmp(&other.created_at),
            "updatedAt" => self.updated_at.cmp(&other.updated_at),
            "lastLoginAt" => self.last_login_at.cmp(&other.last_login_at),
            _ => Ordering::Equal,
        }
    }
}

impl Identifiable for UserIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for UserIdxModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use clean_core_api::ErrorCode;

    fn request() -> UserRequestDto {
        UserRequestDto {
            first_name: "Alan".to_string(),
            last_name: Some("Turing".to_string()),
            username: "aturing".to_string(),
            email: "alan.turing@example.com".to_string(),
            ..UserRequestDto::default()
        }
    }

    #[test]
    fn test_from_request_fills_defaults() {
        let model = UserModel::from_request(&request()).unwrap();

        assert_eq!(model.first_name.as_str(), "Alan");
        assert_eq!(model.last_name.as_ref().map(|s| s.as_str()), Some("Turing"));
        assert_eq!(model.status, UserStatus::Active);
        assert!(model.updated_at.is_none());
        assert!(!model.is_deleted());
    }

    #[test]
    fn test_from_request_keeps_given_id() {
        let id = Uuid::new_v4();
        let dto = UserRequestDto {
            id: Some(id),
            ..request()
        };
        assert_eq!(UserModel::from_request(&dto).unwrap().id, id);
    }

    #[test]
    fn test_from_request_rejects_invalid_email() {
        let dto = UserRequestDto {
            email: "bob@example.com".to_string(),
            ..request()
        };
        let err = UserModel::from_request(&dto).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmailLocalPartTooShort);
    }

    #[test]
    fn test_from_request_rejects_multibyte_overflow() {
        // 31 chars pass the request limit of 60 but take 62 bytes.
        let dto = UserRequestDto {
            first_name: "é".repeat(31),
            ..request()
        };
        let err = UserModel::from_request(&dto).unwrap_err();

        assert!(matches!(
            err,
            ApiError::TooLong {
                field: "firstName",
                max: 60
            }
        ));
        assert_eq!(err.code(), ErrorCode::StringCantBeLongerThan);
    }

    #[test]
    fn test_validate_requires_fields() {
        let mut model = UserModel::from_request(&request()).unwrap();
        model.username = HeaplessString::new();
        assert!(matches!(model.validate(), Err(ApiError::RequiredField("username"))));
    }

    #[test]
    fn test_response_dto_mapping() {
        let model = UserModel::from_request(&request()).unwrap();
        let dto = UserResponseDto::from(&model);

        assert_eq!(dto.id, model.id.to_string());
        assert_eq!(dto.username, "aturing");
        assert_eq!(dto.last_name.as_deref(), Some("Turing"));
        assert_eq!(dto.created_at, model.created_at);
    }

    #[test]
    fn test_to_response_maps_a_whole_page() {
        use clean_core_api::{PageContent, PaginationRequest, SimplePageContent, SliceContent};

        let model = UserModel::from_request(&request()).unwrap();
        let pagination = PaginationRequest::of(0, 10).unwrap().into();
        let page = SimplePageContent::new(vec![model.clone()], pagination, 1).unwrap();

        let mapped = page.map(UserModel::to_response);

        assert_eq!(mapped.content(), &[UserResponseDto::from(&model)]);
        assert_eq!(mapped.total_elements(), 1);
        assert_eq!(mapped.pagination(), page.pagination());
    }

    #[test]
    fn test_index_hashes_are_stable() {
        let model = UserModel::from_request(&request()).unwrap();
        let idx = model.to_index().unwrap();

        assert_eq!(idx.id, model.id);
        assert_eq!(idx.username_hash, hash_as_i64("aturing").unwrap());
        assert_eq!(idx.email_hash, email_hash("Alan.Turing@example.com").unwrap());
    }
}
