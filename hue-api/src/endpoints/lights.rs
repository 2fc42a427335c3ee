//! Light endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// List all lights known to the bridge.
    pub async fn get_lights(&self) -> HueResult<Value> {
        self.rest.get(self.lights.url()).await
    }

    /// List lights found by the last search.
    pub async fn get_new_lights(&self) -> HueResult<Value> {
        self.rest.get(&self.lights.item("new")).await
    }

    /// Start a search for new lights. The bridge expects no body here.
    pub async fn search_for_new_lights(&self) -> HueResult<Value> {
        self.rest.post_empty(self.lights.url()).await
    }

    /// Get one light's attributes and state.
    pub async fn get_light(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::GET, |id| self.lights.item(id), id)
            .await
    }

    /// Rename a light or update other top-level attributes.
    pub async fn set_light_attributes(
        &self,
        id: impl Display,
        attributes: &Value,
    ) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.lights.item(id), id, attributes)
            .await
    }

    /// Update a light's state (on/off, brightness, color).
    pub async fn set_light_state(&self, id: impl Display, state: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.lights.nested(id, "state"), id, state)
            .await
    }

    /// Remove a light from the bridge.
    pub async fn delete_light(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::DELETE, |id| self.lights.item(id), id)
            .await
    }
}
