pub mod append;
pub mod create_batch;
pub mod find_all;
pub mod find_by_customer_id;
pub mod find_by_owner;
pub mod find_by_role;
pub mod find_by_username;
pub mod find_page;
pub mod load_batch;
pub mod pagination;
pub mod unit_of_work;
pub mod update_contact_info;
pub mod update_stage;

// Re-exports
pub use append::*;
pub use create_batch::*;
pub use find_all::*;
pub use find_by_customer_id::*;
pub use find_by_owner::*;
pub use find_by_role::*;
pub use find_by_username::*;
pub use find_page::*;
pub use load_batch::*;
pub use pagination::*;
pub use unit_of_work::*;
pub use update_contact_info::*;
pub use update_stage::*;
