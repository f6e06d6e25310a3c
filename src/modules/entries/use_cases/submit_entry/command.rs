use crate::modules::entries::core::entry::NewEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEntry {
    pub text: String,
}

impl SubmitEntry {
    /// Builds a submission from raw form input. Blank input yields nothing to submit.
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }
}

impl From<SubmitEntry> for NewEntry {
    fn from(command: SubmitEntry) -> Self {
        NewEntry { text: command.text }
    }
}
