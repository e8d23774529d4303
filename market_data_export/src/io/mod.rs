pub mod sink;
pub mod xlsx;
