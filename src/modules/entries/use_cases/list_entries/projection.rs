use crate::modules::entries::core::entry::Entry;
use chrono::{DateTime, Local, Utc};
use std::fmt;

pub const UNKNOWN_USER: &str = "unknown";
pub const INVALID_DATE: &str = "Invalid Date";
pub const USER_BADGE: &str = "User";

/// Display row for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub text: String,
    pub created_at: String,
    pub user: String,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        let created_at = entry
            .created_at
            .as_ref()
            .and_then(|created_at| created_at.instant())
            .map(format_local)
            .unwrap_or_else(|| INVALID_DATE.to_string());
        Self {
            text: entry.text.clone(),
            created_at,
            user: entry.owner().unwrap_or(UNKNOWN_USER).to_string(),
        }
    }
}

impl fmt::Display for EntryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        write!(f, "  {}  [{}] {}", self.created_at, USER_BADGE, self.user)
    }
}

/// Rebuilds the whole visible list from `entries`, keeping their order.
pub fn render(entries: &[Entry]) -> Vec<EntryView> {
    entries.iter().map(EntryView::from).collect()
}

/// Local time zone, laid out like `1/1/2024, 12:00:00 AM`.
pub fn format_local(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
