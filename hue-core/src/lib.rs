//! Hue Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the Hue client crates:
//! - Client configuration (bridge host, whitelist username, settings)
//! - Global error types covering all error categories
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::HueConfig;
pub use error::{HueError, HueResult};
pub use logging::init_logging;
