//! The HTTP-fetch capability the client is built on.
//!
//! [`Transport`] is the single seam between the request layer and the
//! network. Transport details (TLS, timeouts, connection handling) belong
//! to the implementation; the request layer only hands over a method, a
//! URL, and an optional pre-serialized body, and gets the raw response
//! body back. Substituting a fake implementation is the intended way to
//! test anything above this trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method};

use hue_core::config::BridgeConfig;
use hue_core::constants;
use hue_core::error::{HueError, HueResult};

/// Asynchronous HTTP transport.
///
/// Implementations must not interpret HTTP status codes: the response body
/// is returned verbatim for any status, and only transport-level failures
/// (unreachable host, timeout) surface as errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and return the raw response body.
    ///
    /// `body`, when present, is an already-serialized JSON text and is
    /// sent with an `application/json` content type.
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> HueResult<String>;
}

/// Production transport over `reqwest::Client`.
pub struct HttpTransport {
    inner: Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> HueResult<Self> {
        Self::build(
            Duration::from_millis(constants::DEFAULT_API_TIMEOUT_MS),
            false,
        )
    }

    /// Create a transport honoring the timeout and certificate settings of
    /// a [`BridgeConfig`].
    pub fn from_config(config: &BridgeConfig) -> HueResult<Self> {
        Self::build(
            Duration::from_millis(config.api_timeout_ms),
            config.accept_self_signed_certs,
        )
    }

    fn build(timeout: Duration, accept_self_signed_certs: bool) -> HueResult<Self> {
        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(15));

        // Older bridges serve self-signed certificates
        if accept_self_signed_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| HueError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> HueResult<String> {
        let mut builder = self.inner.request(method, url);
        if let Some(body) = body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(classify_error)?;

        // Any status passes through; the body is handed back as-is.
        response.text().await.map_err(classify_error)
    }
}

/// Classify a reqwest error into a HueError variant.
fn classify_error(e: reqwest::Error) -> HueError {
    if e.is_timeout() {
        HueError::Timeout(e.to_string())
    } else if e.is_connect() {
        HueError::Http(format!("connection failed: {e}"))
    } else {
        HueError::Http(e.to_string())
    }
}
