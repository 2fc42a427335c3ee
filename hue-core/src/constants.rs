//! Client-wide constants.

/// Client name, used as the prefix of generated device types.
pub const APP_NAME: &str = "hue-rs";

/// Client version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Portal endpoint for bridge discovery on the local network.
pub const DEFAULT_DISCOVERY_URL: &str = "https://www.meethue.com/api/nupnp";

/// Default bridge API timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Path segment between the bridge host and the whitelist username.
pub const API_SEGMENT: &str = "api";

/// Resource collection path segments exposed by the bridge.
pub mod resources {
    pub const LIGHTS: &str = "lights";
    pub const GROUPS: &str = "groups";
    pub const SCHEDULES: &str = "schedules";
    pub const SCENES: &str = "scenes";
    pub const SENSORS: &str = "sensors";
    pub const RULES: &str = "rules";

    /// All resource collections with item endpoints.
    pub const ALL: &[&str] = &[LIGHTS, GROUPS, SCHEDULES, SCENES, SENSORS, RULES];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_constants() {
        assert_eq!(resources::ALL.len(), 6);
        assert!(resources::ALL.contains(&"lights"));
    }

    #[test]
    fn test_discovery_url_is_absolute() {
        assert!(DEFAULT_DISCOVERY_URL.starts_with("https://"));
    }
}
