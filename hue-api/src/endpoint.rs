//! Immutable URL templates for bridge resource collections.

use std::fmt::Display;

/// A resource-collection endpoint from which item URLs are derived.
///
/// Created once per client and never mutated. Item URLs are plain string
/// concatenation: the bridge addresses resources by short numeric or
/// alphanumeric ids, so no percent-encoding or validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    base: String,
}

impl Collection {
    /// Wrap a collection base URL (e.g. `http://host/api/user/lights`).
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The collection URL itself.
    pub fn url(&self) -> &str {
        &self.base
    }

    /// URL of a single item: `base/id`.
    pub fn item(&self, id: impl Display) -> String {
        format!("{}/{}", self.base, id)
    }

    /// URL of an item sub-path such as `state`, `config`, or `action`:
    /// `base/id/child`.
    pub fn nested(&self, id: impl Display, child: &str) -> String {
        format!("{}/{}/{}", self.base, id, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_is_base_slash_id() {
        let lights = Collection::new("http://10.0.0.5/api/abc/lights");
        assert_eq!(lights.item(3), "http://10.0.0.5/api/abc/lights/3");
        assert_eq!(lights.item("7"), "http://10.0.0.5/api/abc/lights/7");
    }

    #[test]
    fn test_item_id_is_not_encoded() {
        let scenes = Collection::new("http://h/api/u/scenes");
        assert_eq!(scenes.item("ab c"), "http://h/api/u/scenes/ab c");
    }

    #[test]
    fn test_nested_sub_path() {
        let lights = Collection::new("http://10.0.0.5/api/abc/lights");
        assert_eq!(
            lights.nested(3, "state"),
            "http://10.0.0.5/api/abc/lights/3/state"
        );
    }

    #[test]
    fn test_collection_url_unchanged() {
        let groups = Collection::new("http://h/api/u/groups");
        assert_eq!(groups.url(), "http://h/api/u/groups");
    }
}
