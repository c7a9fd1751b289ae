use super::identifiable::Identifiable;

/// Hash projection of an entity, stored next to it for equality lookups
pub trait Index: Identifiable {}

/// Entities that keep an [`Index`] row up to date
pub trait Indexable {
    type IndexType: Index;

    /// Builds the index row. Fails only when a hashed field cannot be
    /// serialized.
    fn to_index(&self) -> Result<Self::IndexType, String>;
}
