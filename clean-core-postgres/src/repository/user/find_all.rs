use async_trait::async_trait;
use clean_core_api::Pagination;
use clean_core_db::models::user::UserModel;
use clean_core_db::repository::find_all::FindAll;
use std::error::Error;

use super::repo_impl::PgUserGateway;

#[async_trait]
impl FindAll<UserModel> for PgUserGateway {
    async fn find_all(&self, sort: &[String]) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        self.fetch_live_users(&Pagination::unpaged_sorted(sort.iter().cloned()), false)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_user;
    use crate::test_helper::setup_test_context;
    use clean_core_api::PaginationError;
    use clean_core_db::repository::{Count, CreateBatch, FindAll};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    #[serial_test::serial]
    async fn test_find_all_sorted() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let gateway = &ctx.user_gateway;

        gateway
            .create_batch(vec![
                create_test_user("zelda"),
                create_test_user("maria"),
                create_test_user("bruno"),
            ])
            .await?;

        let users = gateway.find_all(&["username,asc".to_string()]).await?;
        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["bruno", "maria", "zelda"]);
        assert_eq!(gateway.count().await?, 3);

        let err = gateway.find_all(&["password,asc".to_string()]).await.unwrap_err();
        assert!(err.downcast_ref::<PaginationError>().is_some());
        Ok(())
    }
}
