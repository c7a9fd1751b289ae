use std::collections::HashSet;

use async_trait::async_trait;
use clean_core_api::{Pagination, SimpleSliceContent};
use parking_lot::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::models::{sort_models, NonDeletable, UserModel};
use crate::repository::{
    Count, CreateBatch, DeleteBatch, ExistByIds, FetchWindow, FindAll, FindById, FindSlice,
    GatewayResult, LoadBatch, UpdateBatch, UserGateway, Window,
};
use crate::utils::email_hash;

/// [`UserGateway`] over a vector kept in insertion order.
///
/// Soft-deleted users stay stored but are hidden from every read except
/// [`ExistByIds`] and [`LoadBatch`].
#[derive(Debug, Default)]
pub struct InMemoryUserGateway {
    users: RwLock<Vec<UserModel>>,
}

impl InMemoryUserGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserModel>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Live users ordered by `sort`.
    fn sorted_live(&self, sort: &[String]) -> GatewayResult<Vec<UserModel>> {
        let mut live: Vec<UserModel> = self
            .users
            .read()
            .iter()
            .filter(|user| !user.is_deleted())
            .cloned()
            .collect();
        sort_models(&mut live, sort)?;
        Ok(live)
    }

    /// `limit` rows starting at the pagination's offset, everything when unpaged.
    fn window(
        &self,
        pagination: &Pagination,
        extra: usize,
    ) -> GatewayResult<(Vec<UserModel>, usize)> {
        let live = self.sorted_live(pagination.sort())?;
        let total = live.len();
        let content = match pagination.as_request() {
            Some(request) => {
                let offset = usize::try_from(request.offset())?;
                let limit = request.page_size() as usize + extra;
                live.into_iter().skip(offset).take(limit).collect()
            }
            None => live,
        };
        Ok((content, total))
    }
}

/// Usernames and emails (by `email_hash`) must not repeat, soft-deleted users included.
fn ensure_unique<'a>(users: impl IntoIterator<Item = &'a UserModel>) -> GatewayResult<()> {
    let mut usernames = HashSet::new();
    let mut emails = HashSet::new();
    for user in users {
        if !usernames.insert(user.username.as_str()) {
            return Err(format!("User with username '{}' already exists", user.username).into());
        }
        if !emails.insert(email_hash(&user.email)?) {
            return Err(format!("User with email '{}' already exists", user.email).into());
        }
    }
    Ok(())
}

#[async_trait]
impl FindById<UserModel> for InMemoryUserGateway {
    async fn find_by_id(&self, id: Uuid) -> GatewayResult<Option<UserModel>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|user| user.id == id && !user.is_deleted())
            .cloned())
    }
}

#[async_trait]
impl LoadBatch<UserModel> for InMemoryUserGateway {
    async fn load_batch(&self, ids: &[Uuid]) -> GatewayResult<Vec<Option<UserModel>>> {
        let users = self.users.read();
        Ok(ids
            .iter()
            .map(|id| users.iter().find(|user| user.id == *id).cloned())
            .collect())
    }
}

#[async_trait]
impl ExistByIds for InMemoryUserGateway {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> GatewayResult<Vec<(Uuid, bool)>> {
        let users = self.users.read();
        Ok(ids
            .iter()
            .map(|id| (*id, users.iter().any(|user| user.id == *id)))
            .collect())
    }
}

#[async_trait]
impl Count for InMemoryUserGateway {
    async fn count(&self) -> GatewayResult<u64> {
        Ok(self.users.read().iter().filter(|user| !user.is_deleted()).count() as u64)
    }
}

#[async_trait]
impl FindAll<UserModel> for InMemoryUserGateway {
    async fn find_all(&self, sort: &[String]) -> GatewayResult<Vec<UserModel>> {
        self.sorted_live(sort)
    }
}

#[async_trait]
impl CreateBatch<UserModel> for InMemoryUserGateway {
    async fn create_batch(&self, items: Vec<UserModel>) -> GatewayResult<Vec<UserModel>> {
        let mut users = self.users.write();
        let mut seen: HashSet<Uuid> = users.iter().map(|user| user.id).collect();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(format!("User with id {} already exists", item.id).into());
            }
        }
        ensure_unique(users.iter().chain(&items))?;
        users.extend(items.iter().cloned());
        Ok(items)
    }
}

#[async_trait]
impl UpdateBatch<UserModel> for InMemoryUserGateway {
    async fn update_batch(&self, items: Vec<UserModel>) -> GatewayResult<Vec<UserModel>> {
        let mut users = self.users.write();
        let mut positions = Vec::with_capacity(items.len());
        for item in &items {
            let position = users
                .iter()
                .position(|user| user.id == item.id)
                .ok_or_else(|| format!("User with id {} not found", item.id))?;
            positions.push(position);
        }
        let mut updated = users.clone();
        for (position, item) in positions.into_iter().zip(&items) {
            updated[position] = item.clone();
        }
        ensure_unique(&updated)?;
        *users = updated;
        Ok(items)
    }
}

#[async_trait]
impl DeleteBatch for InMemoryUserGateway {
    async fn delete_batch(&self, ids: &[Uuid]) -> GatewayResult<usize> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|user| !ids.contains(&user.id));
        Ok(before - users.len())
    }
}

#[async_trait]
impl FetchWindow<UserModel> for InMemoryUserGateway {
    #[instrument(skip_all, fields(pagination = %pagination))]
    async fn fetch_window(&self, pagination: &Pagination) -> GatewayResult<Window<UserModel>> {
        let (content, total) = self.window(pagination, 0)?;
        debug!(fetched = content.len(), total, "Fetched in-memory window");
        Ok(Window::new(content, total as u64))
    }
}

#[async_trait]
impl FindSlice<UserModel> for InMemoryUserGateway {
    async fn find_slice(&self, pagination: &Pagination) -> GatewayResult<SimpleSliceContent<UserModel>> {
        let (content, _) = self.window(pagination, 1)?;
        Ok(SimpleSliceContent::from_probe(content, pagination.clone()))
    }
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn find_by_username(&self, username: &str) -> GatewayResult<Option<UserModel>> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|user| user.username.as_str() == username && !user.is_deleted())
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> GatewayResult<Option<UserModel>> {
        let wanted = email_hash(email)?;
        let users = self.users.read();
        for user in users.iter().filter(|user| !user.is_deleted()) {
            if email_hash(&user.email)? == wanted {
                return Ok(Some(user.clone()));
            }
        }
        Ok(None)
    }
}
