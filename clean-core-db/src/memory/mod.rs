pub mod in_memory_user_gateway;

// Re-exports
pub use in_memory_user_gateway::*;
