//! Shared utilities

pub mod config;
pub mod process;

pub use config::ClientConfig;
pub use process::ProcessBuilder;
