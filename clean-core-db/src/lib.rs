pub mod models;
pub mod repository;
pub mod usecase;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use models::*;
pub use repository::*;
