//! CLI library for testing purposes

pub mod config;
pub mod generate;

pub use config::Config;
pub use generate::{run_check, run_generate};
