pub mod auditable;
pub mod email;
pub mod identifiable;
pub mod indexable;
pub mod sortable;
pub mod user;

// Re-exports
pub use auditable::*;
pub use email::*;
pub use identifiable::*;
pub use indexable::*;
pub use sortable::*;
pub use user::*;
