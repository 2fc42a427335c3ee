//! Schedule endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// List all schedules.
    pub async fn get_schedules(&self) -> HueResult<Value> {
        self.rest.get(self.schedules.url()).await
    }

    /// Create a schedule.
    pub async fn create_schedule(&self, schedule: &Value) -> HueResult<Value> {
        self.rest.post(self.schedules.url(), schedule).await
    }

    /// Get one schedule.
    pub async fn get_schedule(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::GET, |id| self.schedules.item(id), id)
            .await
    }

    /// Update a schedule's attributes, command, or timing.
    pub async fn set_schedule(&self, id: impl Display, schedule: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.schedules.item(id), id, schedule)
            .await
    }

    /// Delete a schedule.
    pub async fn delete_schedule(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::DELETE, |id| self.schedules.item(id), id)
            .await
    }
}
