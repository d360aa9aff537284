// Library exports for testing
pub mod config;
pub mod handlers;
pub mod models;
pub mod roster;
pub mod storage;
