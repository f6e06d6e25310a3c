use crate::modules::entries::core::entry::{Entry, Identity, NewEntry};
use crate::modules::entries::core::ports::{BackendError, Endpoint, EntriesBackend};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

/// EntriesBackend over HTTP.
///
/// The client keeps a cookie store, so whatever session cookie the backend sets is sent
/// back on every later request. The cookie is never read here.
#[derive(Debug, Clone)]
pub struct HttpEntriesBackend {
    client: Client,
    api_base: String,
}

impl HttpEntriesBackend {
    pub fn new(api_base: impl Into<String>) -> Result<Self, BackendError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, api_base))
    }

    pub fn with_client(client: Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { client, api_base }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base, endpoint.path())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        BackendError::Transport(error.to_string())
    }
}

fn ensure_success(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Response {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl EntriesBackend for HttpEntriesBackend {
    async fn add(&self, entry: &NewEntry) -> Result<(), BackendError> {
        let url = self.url(Endpoint::Add);
        debug!(%url, "posting entry");
        // The status of /add is not inspected.
        self.client.post(url).json(entry).send().await?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Entry>, BackendError> {
        let url = self.url(Endpoint::All);
        debug!(%url, "fetching entries");
        let response = ensure_success(self.client.get(url).send().await?)?;
        Ok(response.json::<Vec<Entry>>().await?)
    }

    async fn whoami(&self) -> Result<Identity, BackendError> {
        let url = self.url(Endpoint::WhoAmI);
        debug!(%url, "resolving caller");
        let response = ensure_success(self.client.get(url).send().await?)?;
        Ok(response.json::<Identity>().await?)
    }
}
