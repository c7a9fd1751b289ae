pub mod dto;
pub mod error;
pub mod pagination;

pub use dto::*;
pub use error::*;
pub use pagination::*;
