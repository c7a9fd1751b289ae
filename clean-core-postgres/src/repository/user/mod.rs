pub mod count;
pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod fetch_window;
pub mod find_all;
pub mod find_by_id;
pub mod find_slice;
pub mod load_batch;
pub mod repo_impl;
pub mod update_batch;
pub mod user_gateway;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PgUserGateway;
