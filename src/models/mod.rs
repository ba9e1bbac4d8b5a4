pub mod correction;
pub mod direction;
pub mod employee;
pub mod hours;
pub mod punch;
pub mod schedule;
pub mod slots;
