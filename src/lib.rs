pub mod board;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod filter;
pub mod records;
pub mod reports;
