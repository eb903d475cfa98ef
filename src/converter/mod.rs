pub mod alias;
pub mod common;
pub mod count;
pub mod using_chrono;
