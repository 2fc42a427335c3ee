//! Scene endpoints.
//!
//! Scene identifiers are bridge-generated alphanumeric strings rather
//! than small integers; the URL rules are the same.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// List all scenes.
    pub async fn get_scenes(&self) -> HueResult<Value> {
        self.rest.get(self.scenes.url()).await
    }

    /// Create a scene capturing the given lights.
    pub async fn create_scene(&self, scene: &Value) -> HueResult<Value> {
        self.rest.post(self.scenes.url(), scene).await
    }

    /// Get one scene.
    pub async fn get_scene(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::GET, |id| self.scenes.item(id), id)
            .await
    }

    /// Update a scene's attributes or stored light states.
    pub async fn set_scene(&self, id: impl Display, scene: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.scenes.item(id), id, scene)
            .await
    }

    /// Delete a scene.
    pub async fn delete_scene(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::DELETE, |id| self.scenes.item(id), id)
            .await
    }
}
