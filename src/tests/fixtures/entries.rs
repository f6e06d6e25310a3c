// Shared test fixture for entries as the backend returns them.

use crate::modules::entries::core::entry::{CreatedAt, Entry};
use std::fs;

pub struct EntryBuilder {
    inner: Entry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/entry.json").unwrap();
        let inner: Entry = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn text(mut self, v: impl Into<String>) -> Self {
        self.inner.text = v.into();
        self
    }

    pub fn created_at(mut self, v: Option<CreatedAt>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn user_id(mut self, v: Option<String>) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn build(self) -> Entry {
        self.inner
    }
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EntryBuilder::default().build();
        assert_eq!(built.text, "This is a test");
        assert_eq!(
            built.created_at,
            Some(CreatedAt::Text("2024-01-01T00:00:00Z".to_string()))
        );
        assert_eq!(built.user_id.as_deref(), Some("user-fixed-0001"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EntryBuilder::new()
            .text("custom")
            .created_at(Some(CreatedAt::Millis(42)))
            .user_id(None)
            .build();
        assert_eq!(custom.text, "custom");
        assert_eq!(custom.created_at, Some(CreatedAt::Millis(42)));
        assert_eq!(custom.user_id, None);
    }
}
