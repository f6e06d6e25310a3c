use crate::modules::entries::use_cases::list_entries::projection::EntryView;
use std::fmt;

pub const SAVE_FAILED: &str = "Failed to save. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load entries.";
pub const IDENTITY_UNKNOWN: &str = "Could not determine your user id.";

/// The display surface: the input field, the shared error region, the identity line and
/// the entry list. Created once and handed to every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    input: String,
    error: String,
    you_are: String,
    entries: Vec<EntryView>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Overwrites whatever error was shown before.
    pub fn show_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    pub fn you_are(&self) -> &str {
        &self.you_are
    }

    pub fn show_identity(&mut self, user_id: &str) {
        self.you_are = format!("You are: {user_id}");
    }

    pub fn show_identity_unknown(&mut self) {
        self.you_are = IDENTITY_UNKNOWN.to_string();
    }

    pub fn entries(&self) -> &[EntryView] {
        &self.entries
    }

    pub fn replace_entries(&mut self, entries: Vec<EntryView>) {
        self.entries = entries;
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.you_are.is_empty() {
            writeln!(f, "{}", self.you_are)?;
        }
        if !self.error.is_empty() {
            writeln!(f, "! {}", self.error)?;
        }
        for entry in &self.entries {
            writeln!(f, "- {entry}")?;
        }
        write!(f, "> {}", self.input)
    }
}
