// Ports define what the client needs from the backend, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement EntriesBackend in the adapters layer.
//
// Testing guidance
// - Use the in memory backend for handler and controller tests.

use crate::modules::entries::core::entry::{Entry, Identity, NewEntry};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected response status: {status}")]
    Response { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Add,
    All,
    WhoAmI,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Add => "/add",
            Endpoint::All => "/all",
            Endpoint::WhoAmI => "/whoami",
        }
    }
}

#[async_trait]
pub trait EntriesBackend: Send + Sync {
    /// Creates an entry. Only transport failures are reported; the response is ignored.
    async fn add(&self, entry: &NewEntry) -> Result<(), BackendError>;
    async fn all(&self) -> Result<Vec<Entry>, BackendError>;
    async fn whoami(&self) -> Result<Identity, BackendError>;
}
