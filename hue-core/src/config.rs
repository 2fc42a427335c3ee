//! Client configuration management.
//!
//! Handles loading, saving, and accessing client configuration including
//! bridge host, whitelist username, and logging preferences. Configuration
//! is persisted as TOML on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{HueError, HueResult};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HueConfig {
    /// Portal discovery settings.
    #[serde(default)]
    pub portal: PortalConfig,

    /// Bridge connection settings.
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Portal discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Discovery endpoint URL.
    #[serde(default = "default_discovery_url")]
    pub discovery_url: String,
}

/// Bridge connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Bridge IP address or hostname (e.g., "192.168.1.2").
    #[serde(default)]
    pub host: String,

    /// Whitelist username authorizing API access.
    #[serde(default)]
    pub username: String,

    /// Device type sent when registering a new whitelist user.
    #[serde(default = "default_devicetype")]
    pub devicetype: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Whether to accept self-signed SSL certificates from the bridge.
    #[serde(default)]
    pub accept_self_signed_certs: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, console-only logging.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

fn default_discovery_url() -> String {
    constants::DEFAULT_DISCOVERY_URL.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Generate a devicetype of the form `hue-rs#<hostname>`, the convention
/// the bridge expects for whitelist registration.
fn default_devicetype() -> String {
    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());
    format!("{}#{}", constants::APP_NAME, host)
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            discovery_url: default_discovery_url(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            devicetype: default_devicetype(),
            api_timeout_ms: default_api_timeout(),
            accept_self_signed_certs: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl HueConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> HueResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: HueConfig = toml::from_str(&text)?;
        Ok(config)
    }

    /// Load configuration from the default location, falling back to
    /// defaults if the file does not exist yet.
    pub fn load_default() -> HueResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as TOML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> HueResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)
            .map_err(|e| HueError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Default config file location under the platform config directory.
    pub fn default_path() -> HueResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| HueError::Config("no platform config directory".into()))?;
        Ok(base.join(constants::APP_NAME).join("config.toml"))
    }
}

/// Strip an `http://`/`https://` scheme prefix and trailing slashes from a
/// bridge host so URL assembly can rely on a bare host.
pub fn sanitize_host(host: &str) -> String {
    let trimmed = host.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_string()
}
