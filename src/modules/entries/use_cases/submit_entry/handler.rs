use crate::modules::entries::core::entry::NewEntry;
use crate::modules::entries::core::ports::{BackendError, EntriesBackend};
use crate::modules::entries::use_cases::submit_entry::command::SubmitEntry;
use std::sync::Arc;
use tracing::info;

pub struct SubmitEntryHandler<TBackend>
where
    TBackend: EntriesBackend + ?Sized,
{
    backend: Arc<TBackend>,
}

impl<TBackend> SubmitEntryHandler<TBackend>
where
    TBackend: EntriesBackend + ?Sized,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, command: SubmitEntry) -> Result<(), BackendError> {
        info!(length = command.text.len(), "submitting entry");
        let body = NewEntry::from(command);
        self.backend.add(&body).await
    }
}
