use std::sync::Arc;

use clean_core_api::{ApiResult, PaginatedResponseDto, Pagination, SliceContent, UserResponseDto};
use tracing::{debug, instrument};

use crate::models::UserModel;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

/// List users, either all at once or one page at a time.
pub struct ListUser<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> ListUser<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute_all(&self, sort: &[String]) -> ApiResult<Vec<UserResponseDto>> {
        let users = self.gateway.find_all(sort).await.map_err(gateway_error)?;
        Ok(users.iter().map(UserResponseDto::from).collect())
    }

    #[instrument(skip_all, fields(pagination = %pagination))]
    pub async fn execute(
        &self,
        pagination: &Pagination,
    ) -> ApiResult<PaginatedResponseDto<UserResponseDto>> {
        let page = self
            .gateway
            .find_page(pagination)
            .await
            .map_err(gateway_error)?;
        debug!(fetched = page.number_of_elements(), "Listed users");
        Ok(page.map(UserModel::to_response).into())
    }
}
