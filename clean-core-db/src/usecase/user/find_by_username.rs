use std::sync::Arc;

use clean_core_api::{ApiError, ApiResult, UserResponseDto};
use tracing::instrument;

use super::USER;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

pub struct FindUserByUsername<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> FindUserByUsername<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, username: &str) -> ApiResult<UserResponseDto> {
        self.gateway
            .find_by_username(username)
            .await
            .map_err(gateway_error)?
            .map(|user| UserResponseDto::from(&user))
            .ok_or(ApiError::NotFound {
                entity: USER,
                field: "username",
            })
    }
}
