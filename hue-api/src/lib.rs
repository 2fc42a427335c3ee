//! Hue API - HTTP client for the Hue bridge REST API.
//!
//! This crate covers the three scopes of the bridge API: portal-level
//! bridge discovery, bridge-level whitelist user creation, and the full
//! per-user resource surface (configuration, lights, groups, schedules,
//! scenes, sensors, rules). Requests go through an injectable transport so
//! the client can be exercised without a bridge on the network. Response
//! payloads are returned as parsed JSON exactly as the bridge sent them.

pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod response;
pub mod transport;

// Re-export key types
pub use client::{Bridge, Portal, RestClient, UserClient};
pub use endpoint::Collection;
pub use response::{BridgeError, DiscoveredBridge};
pub use transport::{HttpTransport, Transport};
