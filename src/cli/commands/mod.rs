pub mod correct;
pub mod day;
pub mod employee;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
pub mod sheet;
