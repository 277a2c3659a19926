pub mod auth;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod employees;
pub mod export;
pub mod records;
