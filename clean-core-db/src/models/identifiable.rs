use uuid::Uuid;

/// Entities with a stable UUID primary key
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
