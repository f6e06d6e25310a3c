use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A text record as stored by the backend. The client only creates and lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub text: String,
    #[serde(default)]
    pub created_at: Option<CreatedAt>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Entry {
    /// The owning identity, treating an empty string the same as a missing one.
    pub fn owner(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Backend-assigned creation time. The backend may send an ISO-8601 string or epoch millis.
/// Any other JSON value is kept as `Other` so one odd timestamp never fails a whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Millis(i64),
    Text(String),
    Other(Value),
}

impl CreatedAt {
    /// The instant this value denotes; `None` renders as `Invalid Date`.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            CreatedAt::Millis(millis) => DateTime::from_timestamp_millis(*millis),
            CreatedAt::Text(text) => parse_text(text.trim()),
            CreatedAt::Other(Value::Number(number)) => number
                .as_f64()
                .filter(|millis| millis.is_finite())
                .and_then(|millis| DateTime::from_timestamp_millis(millis.trunc() as i64)),
            CreatedAt::Other(_) => None,
        }
    }
}

// Zoned strings keep their offset, a bare date-time is local, a bare date is UTC midnight.
fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
    {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|instant| instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Request body of `/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub text: String,
}

/// Response body of `/whoami`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
}
