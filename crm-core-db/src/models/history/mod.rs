pub mod stage_history;

pub use stage_history::*;
