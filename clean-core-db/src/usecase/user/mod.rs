pub mod create;
pub mod delete;
pub mod find_by_email;
pub mod find_by_id;
pub mod find_by_username;
pub mod list;
pub mod update;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports
pub use create::*;
pub use delete::*;
pub use find_by_email::*;
pub use find_by_id::*;
pub use find_by_username::*;
pub use list::*;
pub use update::*;

pub(crate) const USER: &str = "User";
