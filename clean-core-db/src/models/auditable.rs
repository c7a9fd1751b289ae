use chrono::{DateTime, Utc};

use super::identifiable::Identifiable;

/// Trait for entities that keep track of when they were created and last changed
pub trait Auditable: Identifiable {
    fn get_created_at(&self) -> DateTime<Utc>;

    /// Returns the time of the last update, if the entity was ever updated
    fn get_updated_at(&self) -> Option<DateTime<Utc>>;
}

/// Trait for entities that are never physically removed, only marked as deleted
pub trait NonDeletable: Identifiable {
    fn get_deleted_at(&self) -> Option<DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.get_deleted_at().is_some()
    }
}
