//! Clients for the three scopes of the bridge API.
//!
//! [`Portal`] (bridge discovery), [`Bridge`] (whitelist user creation),
//! and [`UserClient`] (authenticated resource operations) are immutable
//! value objects over URL strings captured at construction. All requests
//! funnel through [`RestClient`], which serializes JSON bodies, hands the
//! call to the injected [`Transport`], and parses the response body as
//! JSON. Whatever the bridge sent back, including its application-level
//! error envelopes, is returned to the caller untouched.

use std::fmt::Display;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use hue_core::config::{sanitize_host, BridgeConfig};
use hue_core::constants::{self, resources};
use hue_core::error::{HueError, HueResult};

use crate::endpoint::Collection;
use crate::transport::{HttpTransport, Transport};

/// Generic JSON request layer shared by all client scopes.
///
/// Performs no retries, applies no timeouts of its own, and never
/// inspects HTTP status codes; failures it can produce are body
/// serialization, transport errors, and response parsing.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
}

impl RestClient {
    /// Wrap a transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// A handle to the underlying transport, for deriving sibling clients.
    pub fn transport(&self) -> Arc<dyn Transport> {
        self.transport.clone()
    }

    /// Serialize `body` if present, issue the request, and parse the
    /// response body as JSON.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> HueResult<Value> {
        let payload = match body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };

        debug!("{} {}", method, url);
        let text = self.transport.send(method, url, payload).await?;

        serde_json::from_str(&text)
            .map_err(|e| HueError::Serialization(format!("response is not valid JSON: {e}")))
    }

    // --- Verb specializations ---

    /// GET a URL. Never carries a body.
    pub async fn get(&self, url: &str) -> HueResult<Value> {
        self.request(Method::GET, url, None).await
    }

    /// DELETE a URL. Never carries a body.
    pub async fn delete(&self, url: &str) -> HueResult<Value> {
        self.request(Method::DELETE, url, None).await
    }

    /// PUT a JSON body to a URL.
    pub async fn put(&self, url: &str, body: &Value) -> HueResult<Value> {
        self.request(Method::PUT, url, Some(body)).await
    }

    /// POST a JSON body to a URL.
    pub async fn post(&self, url: &str, body: &Value) -> HueResult<Value> {
        self.request(Method::POST, url, Some(body)).await
    }

    /// POST without a body (the bridge starts device searches this way).
    pub async fn post_empty(&self, url: &str) -> HueResult<Value> {
        self.request(Method::POST, url, None).await
    }

    // --- Identifier-parametrized forms ---

    /// Body-less request (GET/DELETE) against an identifier-keyed URL:
    /// substitutes `url_for(id)` for the URL and forwards nothing else.
    pub async fn send_item<U>(&self, method: Method, url_for: U, id: impl Display) -> HueResult<Value>
    where
        U: FnOnce(&str) -> String,
    {
        let id = id.to_string();
        self.request(method, &url_for(&id), None).await
    }

    /// Body-carrying request (PUT/POST) against an identifier-keyed URL:
    /// substitutes `url_for(id)` for the URL and forwards the body
    /// unchanged.
    pub async fn send_item_with_body<U>(
        &self,
        method: Method,
        url_for: U,
        id: impl Display,
        body: &Value,
    ) -> HueResult<Value>
    where
        U: FnOnce(&str) -> String,
    {
        let id = id.to_string();
        self.request(method, &url_for(&id), Some(body)).await
    }
}

/// Portal-scope client: bridge discovery.
#[derive(Clone)]
pub struct Portal {
    rest: RestClient,
    discovery_url: String,
}

impl Portal {
    /// Portal with the default HTTP transport and discovery endpoint.
    pub fn new() -> HueResult<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }

    /// Portal over an injected transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            rest: RestClient::new(transport),
            discovery_url: constants::DEFAULT_DISCOVERY_URL.to_string(),
        }
    }

    /// Override the discovery endpoint (e.g. from configuration).
    pub fn with_discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }

    /// The discovery endpoint this portal queries.
    pub fn discovery_url(&self) -> &str {
        &self.discovery_url
    }

    /// Locate bridges on the local network. Returns the portal's JSON
    /// response as-is; see [`crate::response::parse_discovery`] for a
    /// typed view.
    pub async fn discover(&self) -> HueResult<Value> {
        self.rest.get(&self.discovery_url).await
    }

    /// A bridge-scope client for `host`, sharing this portal's transport.
    pub fn bridge(&self, host: &str) -> Bridge {
        Bridge::with_transport(host, self.rest.transport())
    }
}

/// Bridge-scope client: whitelist user creation.
#[derive(Clone)]
pub struct Bridge {
    rest: RestClient,
    root: String,
}

impl Bridge {
    /// Bridge client with the default HTTP transport.
    pub fn new(host: &str) -> HueResult<Self> {
        Ok(Self::with_transport(host, Arc::new(HttpTransport::new()?)))
    }

    /// Bridge client over an injected transport.
    pub fn with_transport(host: &str, transport: Arc<dyn Transport>) -> Self {
        let root = format!(
            "http://{}/{}",
            sanitize_host(host),
            constants::API_SEGMENT
        );
        Self {
            rest: RestClient::new(transport),
            root,
        }
    }

    /// The bridge API root, `http://<host>/api`.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Register a whitelist user. The bridge answers with the generated
    /// username (press the link button first).
    pub async fn create_user(&self, devicetype: &str) -> HueResult<Value> {
        let body = serde_json::json!({ "devicetype": devicetype });
        self.rest.post(&self.root, &body).await
    }

    /// A user-scope client for `username`, sharing this bridge's transport.
    pub fn user(&self, username: &str) -> UserClient {
        UserClient::from_api_root(&self.root, username, self.rest.transport())
    }
}

/// User-scope client: the full resource surface of the bridge.
///
/// Holds one URL template per resource collection, all derived from
/// `http://<host>/api/<username>` at construction. Two clients built from
/// the same host and username behave identically but share nothing
/// mutable.
#[derive(Clone)]
pub struct UserClient {
    pub(crate) rest: RestClient,
    pub(crate) root: String,
    pub(crate) config_url: String,
    pub(crate) lights: Collection,
    pub(crate) groups: Collection,
    pub(crate) schedules: Collection,
    pub(crate) scenes: Collection,
    pub(crate) sensors: Collection,
    pub(crate) rules: Collection,
}

impl UserClient {
    /// User client with the default HTTP transport.
    pub fn new(host: &str, username: &str) -> HueResult<Self> {
        Ok(Self::with_transport(
            host,
            username,
            Arc::new(HttpTransport::new()?),
        ))
    }

    /// User client over an injected transport.
    pub fn with_transport(host: &str, username: &str, transport: Arc<dyn Transport>) -> Self {
        let api_root = format!(
            "http://{}/{}",
            sanitize_host(host),
            constants::API_SEGMENT
        );
        Self::from_api_root(&api_root, username, transport)
    }

    /// User client from a [`BridgeConfig`], using its timeout and
    /// certificate settings for the transport.
    pub fn from_config(config: &BridgeConfig) -> HueResult<Self> {
        if config.host.is_empty() {
            return Err(HueError::MissingConfig("bridge.host".into()));
        }
        if config.username.is_empty() {
            return Err(HueError::MissingConfig("bridge.username".into()));
        }
        Ok(Self::with_transport(
            &config.host,
            &config.username,
            Arc::new(HttpTransport::from_config(config)?),
        ))
    }

    fn from_api_root(api_root: &str, username: &str, transport: Arc<dyn Transport>) -> Self {
        let root = format!("{api_root}/{username}");
        Self {
            rest: RestClient::new(transport),
            config_url: format!("{root}/config"),
            lights: Collection::new(format!("{root}/{}", resources::LIGHTS)),
            groups: Collection::new(format!("{root}/{}", resources::GROUPS)),
            schedules: Collection::new(format!("{root}/{}", resources::SCHEDULES)),
            scenes: Collection::new(format!("{root}/{}", resources::SCENES)),
            sensors: Collection::new(format!("{root}/{}", resources::SENSORS)),
            rules: Collection::new(format!("{root}/{}", resources::RULES)),
            root,
        }
    }

    /// The user API root, `http://<host>/api/<username>`.
    pub fn root(&self) -> &str {
        &self.root
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EchoTransport {
        seen: Mutex<Vec<(Method, String, Option<String>)>>,
        reply: String,
    }

    impl EchoTransport {
        fn new(reply: &str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl Transport for EchoTransport {
        async fn send(
            &self,
            method: Method,
            url: &str,
            body: Option<String>,
        ) -> HueResult<String> {
            self.seen
                .lock()
                .unwrap()
                .push((method, url.to_string(), body));
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_bridge_root_url() {
        let bridge = Bridge::with_transport("10.0.0.5", Arc::new(test_util::NoopTransport));
        assert_eq!(bridge.root(), "http://10.0.0.5/api");
    }

    #[test]
    fn test_bridge_host_is_sanitized() {
        let bridge = Bridge::with_transport("http://10.0.0.5/", Arc::new(test_util::NoopTransport));
        assert_eq!(bridge.root(), "http://10.0.0.5/api");
    }

    #[test]
    fn test_user_client_captures_urls() {
        let client = test_util::offline_client();
        assert_eq!(client.root(), "http://10.0.0.5/api/testuser");
        assert_eq!(client.lights.url(), "http://10.0.0.5/api/testuser/lights");
        assert_eq!(client.config_url, "http://10.0.0.5/api/testuser/config");
    }

    #[test]
    fn test_independent_clients_build_identical_urls() {
        let a = test_util::offline_client();
        let b = test_util::offline_client();
        assert_eq!(a.lights.item(3), b.lights.item(3));
        assert_eq!(a.rules.url(), b.rules.url());
    }

    #[tokio::test]
    async fn test_request_serializes_body_and_parses_reply() {
        let transport = Arc::new(EchoTransport::new(r#"{"ok":true}"#));
        let rest = RestClient::new(transport.clone());

        let body = serde_json::json!({"on": true});
        let reply = rest.request(Method::PUT, "http://h/x", Some(&body)).await.unwrap();
        assert_eq!(reply, serde_json::json!({"ok": true}));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, Method::PUT);
        assert_eq!(seen[0].1, "http://h/x");
        assert_eq!(seen[0].2.as_deref(), Some(r#"{"on":true}"#));
    }

    #[tokio::test]
    async fn test_get_and_delete_never_send_a_body() {
        let transport = Arc::new(EchoTransport::new("[]"));
        let rest = RestClient::new(transport.clone());

        rest.get("http://h/a").await.unwrap();
        rest.delete("http://h/b").await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert!(seen.iter().all(|(_, _, body)| body.is_none()));
    }

    #[tokio::test]
    async fn test_send_item_substitutes_generated_url() {
        let transport = Arc::new(EchoTransport::new("{}"));
        let rest = RestClient::new(transport.clone());
        let lights = Collection::new("http://h/api/u/lights");

        rest.send_item(Method::GET, |id| lights.item(id), 3)
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].1, "http://h/api/u/lights/3");
        assert_eq!(seen[0].2, None);
    }

    #[tokio::test]
    async fn test_send_item_with_body_forwards_body_unchanged() {
        let transport = Arc::new(EchoTransport::new("{}"));
        let rest = RestClient::new(transport.clone());
        let lights = Collection::new("http://h/api/u/lights");

        let state = serde_json::json!({"bri": 128, "on": false});
        rest.send_item_with_body(Method::PUT, |id| lights.nested(id, "state"), 3, &state)
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, Method::PUT);
        assert_eq!(seen[0].1, "http://h/api/u/lights/3/state");
        let sent: Value = serde_json::from_str(seen[0].2.as_deref().unwrap()).unwrap();
        assert_eq!(sent, state);
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_serialization_error() {
        let transport = Arc::new(EchoTransport::new("<html>404</html>"));
        let rest = RestClient::new(transport);

        let err = rest.get("http://h/x").await.unwrap_err();
        assert!(matches!(err, HueError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let rest = RestClient::new(Arc::new(test_util::NoopTransport));
        let err = rest.get("http://h/x").await.unwrap_err();
        assert!(matches!(err, HueError::Internal(_)));
    }
}
