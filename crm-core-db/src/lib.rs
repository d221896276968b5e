pub mod memory;
pub mod models;
pub mod policy;
pub mod repository;
pub mod service;
pub mod utils;

pub use memory::InMemoryStore;
pub use models::*;
pub use service::CustomerService;
