pub mod customer;
pub mod db_init;
pub mod history;
pub mod user;
