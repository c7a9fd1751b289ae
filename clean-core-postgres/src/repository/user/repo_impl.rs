use std::error::Error;
use std::sync::Arc;

use clean_core_api::Pagination;
use clean_core_db::models::user::{UserIdxModel, UserModel};
use sqlx::{postgres::PgRow, PgPool, Postgres, QueryBuilder, Row};

use crate::pagination::{PgPageQuery, SortColumns};
use crate::utils::{get_heapless_string, get_optional_heapless_string, get_parsed, TryFromRow};

/// Sort properties accepted for users and the columns they map to.
pub const USER_SORT_COLUMNS: SortColumns = SortColumns::new(
    &[
        ("id", "id"),
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("username", "username"),
        ("email", "email"),
        ("status", "status"),
        ("createdAt", "created_at"),
        ("updatedAt", "updated_at"),
        ("lastLoginAt", "last_login_at"),
    ],
    "id",
);

pub(super) const SELECT_LIVE_USERS: &str = "SELECT * FROM app_user WHERE deleted_at IS NULL";

pub struct PgUserGateway {
    pub pool: Arc<PgPool>,
}

impl PgUserGateway {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Live users in the window described by `pagination`, one extra row
    /// when `probe` is set.
    pub(super) async fn fetch_live_users(
        &self,
        pagination: &Pagination,
        probe: bool,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        let mut page_query = PgPageQuery::from_pagination(pagination, &USER_SORT_COLUMNS)?;
        if probe {
            page_query = page_query.with_probe();
        }

        let mut builder = QueryBuilder::<Postgres>::new(SELECT_LIVE_USERS);
        page_query.push_onto(&mut builder);
        let rows = builder.build().fetch_all(&*self.pool).await?;

        rows.iter().map(UserModel::try_from_row).collect()
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserModel {
            id: row.try_get("id")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_optional_heapless_string(row, "last_name")?,
            username: get_heapless_string(row, "username")?,
            email: get_heapless_string(row, "email")?,
            status: get_parsed(row, "status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
            disabled_at: row.try_get("disabled_at")?,
            last_login_at: row.try_get("last_login_at")?,
        })
    }
}

impl TryFromRow<PgRow> for UserIdxModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserIdxModel {
            id: row.try_get("id")?,
            username_hash: row.try_get("username_hash")?,
            email_hash: row.try_get("email_hash")?,
        })
    }
}
