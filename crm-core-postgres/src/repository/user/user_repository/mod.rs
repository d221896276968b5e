pub mod repo_impl;
pub mod create_batch;
pub mod find_by_role;
pub mod find_by_username;

pub use repo_impl::UserRepositoryImpl;
