//! Rule endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// List all rules.
    pub async fn get_rules(&self) -> HueResult<Value> {
        self.rest.get(self.rules.url()).await
    }

    /// Create a rule from conditions and actions.
    pub async fn create_rule(&self, rule: &Value) -> HueResult<Value> {
        self.rest.post(self.rules.url(), rule).await
    }

    /// Get one rule.
    pub async fn get_rule(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::GET, |id| self.rules.item(id), id)
            .await
    }

    /// Update a rule's name, conditions, or actions.
    pub async fn set_rule(&self, id: impl Display, rule: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.rules.item(id), id, rule)
            .await
    }

    /// Delete a rule.
    pub async fn delete_rule(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::DELETE, |id| self.rules.item(id), id)
            .await
    }
}
