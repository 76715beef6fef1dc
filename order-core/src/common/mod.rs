//! Common utilities and shared infrastructure
//!
//! - Configuration management
//! - Logging setup

pub mod config;
pub mod logger;

// Re-export commonly used items
pub use config::Config;
pub use logger::{cleanup_old_logs, init_logger, init_logger_with_file};
