pub mod duplicate_guard;
pub mod phone;
pub mod reporting;

pub use duplicate_guard::*;
pub use phone::*;
pub use reporting::*;
