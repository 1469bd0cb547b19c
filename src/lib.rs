pub mod adapters;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod observability;
