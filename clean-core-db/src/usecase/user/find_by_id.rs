use std::sync::Arc;

use clean_core_api::{ApiError, ApiResult, UserResponseDto};
use tracing::instrument;
use uuid::Uuid;

use super::USER;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

pub struct FindUserById<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> FindUserById<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: Uuid) -> ApiResult<UserResponseDto> {
        self.gateway
            .find_by_id(id)
            .await
            .map_err(gateway_error)?
            .map(|user| UserResponseDto::from(&user))
            .ok_or(ApiError::NotFound {
                entity: USER,
                field: "id",
            })
    }
}
