//! Shared test utilities for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;

use hue_api::Transport;
use hue_core::error::{HueError, HueResult};

/// A request recorded by the fake transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// In-memory transport: records every request and replays canned
/// responses front-first. With no canned response queued it answers `{}`.
pub struct FakeTransport {
    requests: Mutex<Vec<Recorded>>,
    responses: Mutex<Vec<HueResult<String>>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(Vec::new()),
        })
    }

    /// Queue a response body for the next request.
    pub fn respond_with(&self, body: &str) {
        self.responses.lock().unwrap().push(Ok(body.to_string()));
    }

    /// Queue a transport failure for the next request.
    pub fn fail_with(&self, err: HueError) {
        self.responses.lock().unwrap().push(Err(err));
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request seen so far; panics if there were zero or many.
    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> HueResult<String> {
        self.requests.lock().unwrap().push(Recorded {
            method,
            url: url.to_string(),
            body,
        });

        let mut queue = self.responses.lock().unwrap();
        if queue.is_empty() {
            Ok("{}".to_string())
        } else {
            queue.remove(0)
        }
    }
}
