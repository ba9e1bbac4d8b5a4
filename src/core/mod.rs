pub mod calculator;
pub mod classify;
pub mod infer;
pub mod parser;
pub mod service;
