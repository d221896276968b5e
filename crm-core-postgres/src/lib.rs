pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use config::{CrmSettings, DatabaseConfig};
pub use postgres_repositories::PostgresRepositories;
pub use unit_of_work::{Executor, PostgresSession};

#[cfg(test)]
pub mod test_helper;
