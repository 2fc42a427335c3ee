//! Group endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// List all groups.
    pub async fn get_groups(&self) -> HueResult<Value> {
        self.rest.get(self.groups.url()).await
    }

    /// Create a group from a set of lights.
    pub async fn create_group(&self, group: &Value) -> HueResult<Value> {
        self.rest.post(self.groups.url(), group).await
    }

    /// Get one group's attributes and last commanded action.
    pub async fn get_group(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::GET, |id| self.groups.item(id), id)
            .await
    }

    /// Update a group's name or member lights.
    pub async fn set_group_attributes(
        &self,
        id: impl Display,
        attributes: &Value,
    ) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.groups.item(id), id, attributes)
            .await
    }

    /// Apply a state change to every light in a group.
    pub async fn set_group_state(&self, id: impl Display, action: &Value) -> HueResult<Value> {
        self.rest
            .send_item_with_body(Method::PUT, |id| self.groups.nested(id, "action"), id, action)
            .await
    }

    /// Delete a group.
    pub async fn delete_group(&self, id: impl Display) -> HueResult<Value> {
        self.rest
            .send_item(Method::DELETE, |id| self.groups.item(id), id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_util::offline_client;

    #[test]
    fn test_group_action_url() {
        let client = offline_client();
        assert_eq!(
            client.groups.nested(1, "action"),
            "http://10.0.0.5/api/testuser/groups/1/action"
        );
    }
}
