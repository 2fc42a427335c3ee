//! Sensor endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// List all sensors.
    pub async fn get_sensors(&self) -> HueResult<Value> {
        self.rest.get(self.sensors.url()).await
    }

    /// Create a CLIP sensor.
    pub async fn create_sensor(&self, sensor: &Value) -> HueResult<Value> {
        self.rest.post(self.sensors.url(), sensor).await
    }

    /// List sensors found by the last search.
    pub async fn get_new_sensors(&self) -> HueResult<Value> {
        self.rest.get(&self.sensors.item("new")).await
    }

    /// Start a search for new sensors. The bridge expects no body here.
    pub async fn search_for_new_sensors(&self) -> HueResult<Value> {
        self.rest.post_empty(self.sensors.url()).await
    }

    /// Get one sensor.
    pub async fn get_sensor(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::GET, |id| self.sensors.item(id), id)
            .await
    }

    /// Rename a sensor.
    pub async fn set_sensor_attributes(
        &self,
        id: impl Display,
        attributes: &Value,
    ) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.sensors.item(id), id, attributes)
            .await
    }

    /// Update a sensor's config (on, battery, alert thresholds).
    pub async fn set_sensor_config(&self, id: impl Display, config: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.sensors.nested(id, "config"), id, config)
            .await
    }

    /// Update a CLIP sensor's state.
    pub async fn set_sensor_state(&self, id: impl Display, state: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.sensors.nested(id, "state"), id, state)
            .await
    }

    /// Delete a sensor.
    pub async fn delete_sensor(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::DELETE, |id| self.sensors.item(id), id)
            .await
    }
}
