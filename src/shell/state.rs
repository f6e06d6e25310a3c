use crate::modules::entries::adapters::outbound::http_backend::HttpEntriesBackend;
use crate::modules::entries::core::ports::{BackendError, EntriesBackend};
use crate::modules::entries::use_cases::identify_caller::handler::IdentifyCallerHandler;
use crate::modules::entries::use_cases::list_entries::handler::ListEntriesHandler;
use crate::modules::entries::use_cases::submit_entry::handler::SubmitEntryHandler;
use crate::shell::config::ClientConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: Arc<SubmitEntryHandler<dyn EntriesBackend>>,
    pub list_handler: Arc<ListEntriesHandler<dyn EntriesBackend>>,
    pub identify_handler: Arc<IdentifyCallerHandler<dyn EntriesBackend>>,
}

impl AppState {
    pub fn new(backend: Arc<dyn EntriesBackend>) -> Self {
        Self {
            submit_handler: Arc::new(SubmitEntryHandler::new(backend.clone())),
            list_handler: Arc::new(ListEntriesHandler::new(backend.clone())),
            identify_handler: Arc::new(IdentifyCallerHandler::new(backend)),
        }
    }

    /// All handlers share one HTTP client, so they share its cookie store.
    pub fn from_config(config: &ClientConfig) -> Result<Self, BackendError> {
        let backend = HttpEntriesBackend::new(config.api_base.clone())?;
        Ok(Self::new(Arc::new(backend)))
    }
}
