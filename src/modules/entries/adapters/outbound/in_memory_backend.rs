// In memory implementation of the EntriesBackend port.
//
// Purpose
// - Support handler and controller tests without a running backend.
//
// Responsibilities
// - Keep entries in insertion order and stamp them with the caller id.
// - Record every call so tests can assert what went over the "wire".
// - Allow failing or delaying individual endpoints.

use crate::modules::entries::core::entry::{CreatedAt, Entry, Identity, NewEntry};
use crate::modules::entries::core::ports::{BackendError, Endpoint, EntriesBackend};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub struct InMemoryEntriesBackend {
    caller: String,
    entries: RwLock<Vec<Entry>>,
    failures: RwLock<HashMap<Endpoint, BackendError>>,
    delays: RwLock<HashMap<Endpoint, u64>>,
    pub calls: Mutex<Vec<Endpoint>>,
    pub added: Mutex<Vec<NewEntry>>,
}

impl Default for InMemoryEntriesBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEntriesBackend {
    pub fn new() -> Self {
        Self::with_caller(Uuid::now_v7().to_string())
    }

    pub fn with_caller(caller: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            entries: RwLock::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
            delays: RwLock::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    pub async fn seed(&self, entries: Vec<Entry>) {
        self.entries.write().await.extend(entries);
    }

    pub async fn fail(&self, endpoint: Endpoint, error: BackendError) {
        self.failures.write().await.insert(endpoint, error);
    }

    pub async fn recover(&self, endpoint: Endpoint) {
        self.failures.write().await.remove(&endpoint);
    }

    pub async fn set_delay_ms(&self, endpoint: Endpoint, delay_ms: u64) {
        self.delays.write().await.insert(endpoint, delay_ms);
    }

    pub async fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| **call == endpoint)
            .count()
    }

    async fn enter(&self, endpoint: Endpoint) -> Result<(), BackendError> {
        self.calls.lock().await.push(endpoint);
        let delay_ms = self.delays.read().await.get(&endpoint).copied();
        if let Some(delay_ms) = delay_ms {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        match self.failures.read().await.get(&endpoint) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EntriesBackend for InMemoryEntriesBackend {
    async fn add(&self, entry: &NewEntry) -> Result<(), BackendError> {
        // /add only surfaces transport failures.
        match self.enter(Endpoint::Add).await {
            Err(BackendError::Response { .. }) => return Ok(()),
            Err(error) => return Err(error),
            Ok(()) => {}
        }
        self.added.lock().await.push(entry.clone());
        self.entries.write().await.push(Entry {
            text: entry.text.clone(),
            created_at: Some(CreatedAt::Millis(Utc::now().timestamp_millis())),
            user_id: Some(self.caller.clone()),
        });
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Entry>, BackendError> {
        self.enter(Endpoint::All).await?;
        Ok(self.entries.read().await.clone())
    }

    async fn whoami(&self) -> Result<Identity, BackendError> {
        self.enter(Endpoint::WhoAmI).await?;
        Ok(Identity {
            user_id: self.caller.clone(),
        })
    }
}
