pub mod repo_impl;
pub mod append;
pub mod find_all;
pub mod find_by_customer_id;
pub mod find_page;

pub use repo_impl::StageHistoryRepositoryImpl;
