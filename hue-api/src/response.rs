//! Caller-side views of bridge response payloads.
//!
//! The client returns every parsed payload untouched, including the
//! bridge's application-level error envelopes; these helpers are for
//! callers that want a typed look at common shapes. Nothing here is
//! applied by the client itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use hue_core::error::HueResult;

/// One entry of the portal discovery response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredBridge {
    /// Bridge serial id.
    pub id: Option<String>,
    /// LAN address of the bridge.
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: Option<String>,
    /// MAC address, when the portal reports one.
    #[serde(rename = "macaddress", default)]
    pub mac_address: Option<String>,
}

/// Typed view of a discovery payload as returned by
/// [`Portal::discover`](crate::client::Portal::discover).
pub fn parse_discovery(value: &Value) -> HueResult<Vec<DiscoveredBridge>> {
    serde_json::from_value(value.clone()).map_err(Into::into)
}

/// Error detail inside a bridge write envelope:
/// `[{"error": {"type": 7, "address": "/lights/3/state", "description": "..."}}]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeError {
    /// Bridge error code.
    #[serde(rename = "type")]
    pub kind: i64,
    /// Resource path the error refers to.
    pub address: String,
    /// Human-readable description.
    pub description: String,
}

/// Collect the error items of a write response. Non-array payloads have
/// no envelope and yield an empty list.
pub fn errors_in(response: &Value) -> Vec<BridgeError> {
    response
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("error"))
                .filter_map(|error| serde_json::from_value(error.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Whether a write response carries no error items.
pub fn is_success(response: &Value) -> bool {
    errors_in(response).is_empty()
}

/// The id reported by a create response, e.g. `[{"success": {"id": "7"}}]`.
pub fn created_id(response: &Value) -> Option<String> {
    response.as_array()?.iter().find_map(|item| {
        item.get("success")?
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
    })
}
