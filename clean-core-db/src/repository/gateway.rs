use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::models::user::UserModel;
use crate::repository::{
    Count, CreateBatch, DeleteBatch, ExistByIds, FetchWindow, FindAll, FindById, FindPage,
    FindSlice, GatewayResult, LoadBatch, UpdateBatch,
};

/// Every gateway operation for one entity type.
pub trait Gateway<T: Identifiable>:
    FindById<T>
    + LoadBatch<T>
    + ExistByIds
    + Count
    + FindAll<T>
    + CreateBatch<T>
    + UpdateBatch<T>
    + DeleteBatch
    + FetchWindow<T>
    + FindPage<T>
    + FindSlice<T>
{
}

impl<T, G> Gateway<T> for G
where
    T: Identifiable,
    G: FindById<T>
        + LoadBatch<T>
        + ExistByIds
        + Count
        + FindAll<T>
        + CreateBatch<T>
        + UpdateBatch<T>
        + DeleteBatch
        + FetchWindow<T>
        + FindPage<T>
        + FindSlice<T>,
{
}

/// User lookups by unique business keys, on top of the generic operations.
#[async_trait]
pub trait UserGateway: Gateway<UserModel> {
    async fn find_by_username(&self, username: &str) -> GatewayResult<Option<UserModel>>;

    /// Email lookups ignore case.
    async fn find_by_email(&self, email: &str) -> GatewayResult<Option<UserModel>>;
}
