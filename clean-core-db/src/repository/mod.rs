pub mod count;
pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod fetch_window;
pub mod find_all;
pub mod find_by_id;
pub mod find_page;
pub mod find_slice;
pub mod gateway;
pub mod load_batch;
pub mod update_batch;

/// Result type shared by all gateway traits.
pub type GatewayResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Re-exports
pub use count::*;
pub use create_batch::*;
pub use delete_batch::*;
pub use exist_by_ids::*;
pub use fetch_window::*;
pub use find_all::*;
pub use find_by_id::*;
pub use find_page::*;
pub use find_slice::*;
pub use gateway::*;
pub use load_batch::*;
pub use update_batch::*;
