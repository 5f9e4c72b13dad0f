//! Snapshot acquisition: one HTTP GET per call against the configured endpoint.

use std::future::Future;

use reqwest::Client;
use url::Url;

use crate::error::FetchError;
use crate::types::Snapshot;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/system-info";

/// Anything that can produce a fresh snapshot on demand.
pub trait SnapshotSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send;
}

pub fn parse_endpoint(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|_| FetchError::InvalidEndpoint(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(FetchError::InvalidEndpoint(raw.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let resp = self.client.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
