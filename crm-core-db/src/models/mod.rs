pub mod customer;
pub mod history;
pub mod identifiable;
pub mod user;

// Re-exports
pub use customer::*;
pub use history::*;
pub use identifiable::*;
pub use user::*;
