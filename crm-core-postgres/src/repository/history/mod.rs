pub mod stage_history_repository;

pub use stage_history_repository::StageHistoryRepositoryImpl;
