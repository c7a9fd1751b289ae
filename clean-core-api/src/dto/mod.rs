pub mod paginated_response;
pub mod user;
pub mod user_status;

// Re-exports
pub use paginated_response::PaginatedResponseDto;
pub use user::{UserRequestDto, UserResponseDto};
pub use user_status::UserStatus;
