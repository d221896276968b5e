pub mod repo_impl;
pub mod create_batch;
pub mod find_all;
pub mod find_by_owner;
pub mod load_batch;
pub mod update_contact_info;
pub mod update_stage;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
