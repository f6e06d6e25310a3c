use crate::modules::entries::core::entry::Entry;
use crate::modules::entries::core::ports::{BackendError, EntriesBackend};
use std::sync::Arc;

pub struct ListEntriesHandler<TBackend>
where
    TBackend: EntriesBackend + ?Sized,
{
    backend: Arc<TBackend>,
}

impl<TBackend> ListEntriesHandler<TBackend>
where
    TBackend: EntriesBackend + ?Sized,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    /// Fetches the full list in backend order.
    pub async fn handle(&self) -> Result<Vec<Entry>, BackendError> {
        self.backend.all().await
    }
}
