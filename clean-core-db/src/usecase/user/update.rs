use std::sync::Arc;

use chrono::Utc;
use clean_core_api::{ApiError, ApiResult, UserRequestDto, UserResponseDto};
use tracing::{info, instrument};
use uuid::Uuid;

use super::USER;
use crate::models::UserModel;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

/// Replace a live user's data. Creation time and identity are kept.
pub struct UpdateUser<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> UpdateUser<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self, request))]
    pub async fn execute(&self, id: Uuid, request: &UserRequestDto) -> ApiResult<UserResponseDto> {
        let existing = self
            .gateway
            .find_by_id(id)
            .await
            .map_err(gateway_error)?
            .ok_or(ApiError::NotFound {
                entity: USER,
                field: "id",
            })?;

        let mut model = UserModel::from_request(request)?;
        model.id = existing.id;
        model.created_at = existing.created_at;
        model.updated_at = Some(Utc::now());

        if let Some(other) = self
            .gateway
            .find_by_username(&model.username)
            .await
            .map_err(gateway_error)?
        {
            if other.id != id {
                return Err(ApiError::AlreadyExists {
                    entity: USER,
                    field: "username",
                });
            }
        }
        if let Some(other) = self
            .gateway
            .find_by_email(&model.email)
            .await
            .map_err(gateway_error)?
        {
            if other.id != id {
                return Err(ApiError::AlreadyExists {
                    entity: USER,
                    field: "email",
                });
            }
        }

        let mut updated = self
            .gateway
            .update_batch(vec![model])
            .await
            .map_err(gateway_error)?;
        let updated = updated
            .pop()
            .ok_or_else(|| ApiError::InternalError("Gateway returned no updated user".to_string()))?;

        info!(id = %updated.id, "User updated");
        Ok(UserResponseDto::from(&updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::FindById;
    use crate::usecase::user::fixtures::{gateway_with, request};
    use crate::usecase::user::FindUserByUsername;

    #[tokio::test]
    async fn test_update_keeps_identity() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let gateway = Arc::new(gateway_with(&["alice"]));
        let alice = FindUserByUsername::new(gateway.clone()).execute("alice").await?;
        let id = Uuid::parse_str(&alice.id)?;

        let dto = UserRequestDto {
            id: Some(Uuid::new_v4()),
            first_name: "Alicia".to_string(),
            ..request("alice")
        };
        let updated = UpdateUser::new(gateway.clone()).execute(id, &dto).await?;

        assert_eq!(updated.id, alice.id);
        assert_eq!(updated.first_name, "Alicia");
        assert_eq!(updated.created_at, alice.created_at);
        assert!(updated.updated_at.is_some());

        let stored = gateway.find_by_id(id).await?.unwrap();
        assert_eq!(stored.first_name.as_str(), "Alicia");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_not_found() {
        let use_case = UpdateUser::new(Arc::new(gateway_with(&[])));
        let err = use_case.execute(Uuid::new_v4(), &request("alice")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_to_taken_username_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let gateway = Arc::new(gateway_with(&["alice", "bobby"]));
        let bobby = FindUserByUsername::new(gateway.clone()).execute("bobby").await?;

        let dto = UserRequestDto {
            email: "bobby@example.com".to_string(),
            ..request("alice")
        };
        let err = UpdateUser::new(gateway)
            .execute(Uuid::parse_str(&bobby.id)?, &dto)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AlreadyExists { field: "username", .. }));
        Ok(())
    }
}
