pub mod customer;
pub mod pipeline_stage;

pub use customer::*;
pub use pipeline_stage::*;
