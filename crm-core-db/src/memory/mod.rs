//! In-memory implementation of the unit-of-work traits.
//!
//! Sessions are serialized: `begin` takes the store lock for the whole session and works
//! on a copy of the committed state, which `commit` swaps in as one step. Intended for
//! embedding and tests, where the dataset is a single team's prospect list.

pub mod customer_repository;
pub mod stage_history_repository;
pub mod store;
pub mod user_repository;

pub use customer_repository::MemoryCustomerRepository;
pub use stage_history_repository::MemoryStageHistoryRepository;
pub use store::{InMemoryStore, MemorySession};
pub use user_repository::MemoryUserRepository;
