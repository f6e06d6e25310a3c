use crate::modules::entries::core::entry::Identity;
use crate::modules::entries::core::ports::{BackendError, EntriesBackend};
use std::sync::Arc;

pub struct IdentifyCallerHandler<TBackend>
where
    TBackend: EntriesBackend + ?Sized,
{
    backend: Arc<TBackend>,
}

impl<TBackend> IdentifyCallerHandler<TBackend>
where
    TBackend: EntriesBackend + ?Sized,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self) -> Result<Identity, BackendError> {
        self.backend.whoami().await
    }
}
