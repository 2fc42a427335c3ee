//! Global error types for the Hue client.
//!
//! All error categories across the client are unified into a single
//! `HueError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using HueError.
pub type HueResult<T> = Result<T, HueError>;

/// Unified error type covering all error categories in the Hue client.
///
/// Application-level errors embedded in a successfully parsed bridge
/// payload are deliberately not represented here: the client returns such
/// payloads as success values and leaves inspection to the caller.
#[derive(Error, Debug)]
pub enum HueError {
    // -- Configuration errors --
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error, covering both request body
    /// encoding and response body parsing.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for HueError {
    fn from(e: serde_json::Error) -> Self {
        HueError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for HueError {
    fn from(e: toml::de::Error) -> Self {
        HueError::Config(e.to_string())
    }
}
