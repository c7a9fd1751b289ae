use std::sync::Arc;

use clean_core_api::{ApiError, ApiResult, UserRequestDto, UserResponseDto};
use tracing::{info, instrument};

use super::USER;
use crate::models::UserModel;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

/// Register a new user. Username and email must not be taken by a live user.
pub struct CreateUser<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> CreateUser<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn execute(&self, request: &UserRequestDto) -> ApiResult<UserResponseDto> {
        let model = UserModel::from_request(request)?;

        if self
            .gateway
            .find_by_username(&model.username)
            .await
            .map_err(gateway_error)?
            .is_some()
        {
            return Err(ApiError::AlreadyExists {
                entity: USER,
                field: "username",
            });
        }
        if self
            .gateway
            .find_by_email(&model.email)
            .await
            .map_err(gateway_error)?
            .is_some()
        {
            return Err(ApiError::AlreadyExists {
                entity: USER,
                field: "email",
            });
        }

        let mut created = self
            .gateway
            .create_batch(vec![model])
            .await
            .map_err(gateway_error)?;
        let created = created
            .pop()
            .ok_or_else(|| ApiError::InternalError("Gateway returned no created user".to_string()))?;

        info!(id = %created.id, "User created");
        Ok(UserResponseDto::from(&created))
    }
}
