use std::sync::Arc;

use clean_core_api::{ApiError, ApiResult, UserResponseDto};
use tracing::instrument;

use super::USER;
use crate::repository::UserGateway;
use crate::usecase::gateway_error;

pub struct FindUserByEmail<G: UserGateway> {
    gateway: Arc<G>,
}

impl<G: UserGateway> FindUserByEmail<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, email: &str) -> ApiResult<UserResponseDto> {
        self.gateway
            .find_by_email(email)
            .await
            .map_err(gateway_error)?
            .map(|user| UserResponseDto::from(&user))
            .ok_or(ApiError::NotFound {
                entity: USER,
                field: "email",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::user::fixtures::gateway_with;

    #[tokio::test]
    async fn test_find_user_by_email() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let use_case = FindUserByEmail::new(Arc::new(gateway_with(&["alice", "bobby"])));

        let found = use_case.execute("bobby@example.com").await?;
        assert_eq!(found.username, "bobby");

        let err = use_case.execute("nobody@example.com").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { field: "email", .. }));
        Ok(())
    }
}
