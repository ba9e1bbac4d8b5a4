pub mod cache;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod queries;
