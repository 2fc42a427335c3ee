//! Bridge configuration and info endpoints.

use serde_json::Value;

use hue_core::error::HueResult;

use crate::client::UserClient;

impl UserClient {
    /// Get the full datastore: configuration plus every resource
    /// collection in one payload.
    pub async fn get_full_state(&self) -> HueResult<Value> {
        self.rest.get(&self.root).await
    }

    /// Get the bridge configuration.
    pub async fn get_config(&self) -> HueResult<Value> {
        self.rest.get(&self.config_url).await
    }

    /// Update bridge configuration attributes.
    pub async fn set_config(&self, config: &Value) -> HueResult<Value> {
        self.rest.put(&self.config_url, config).await
    }

    /// List the timezones the bridge supports.
    pub async fn get_timezones(&self) -> HueResult<Value> {
        self.rest
            .get(&format!("{}/info/timezones", self.root))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_util::offline_client;

    #[test]
    fn test_config_url() {
        let client = offline_client();
        assert_eq!(client.config_url, "http://10.0.0.5/api/testuser/config");
    }
}
