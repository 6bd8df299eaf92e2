pub mod file;
pub mod xlsx;
