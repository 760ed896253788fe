//! Small helpers shared across the service

pub mod date;

pub use date::is_valid_date;
