use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderName, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_LENGTH, CONTENT_TYPE};

use crate::config::FetchConfig;
use crate::error::{InspectorError, Result};
use crate::source::check_size;

/// Body and the headers the inspector cares about.
#[derive(Clone, Debug, Default)]
pub struct FetchedResource {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// Value of `Access-Control-Allow-Origin`, if the server sent one.
    pub allow_origin: Option<String>,
}

/// Retrieves remote resources. Called from the load worker, never the UI thread.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchedResource>;
}

/// Blocking HTTP(S) fetcher.
pub struct HttpFetcher {
    client: Client,
    max_bytes: u64,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| InspectorError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedResource> {
        tracing::debug!(url, "sending request");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| InspectorError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InspectorError::Fetch(format!("HTTP {}", status.as_u16())));
        }

        let headers = response.headers();
        let header_str = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header_str(CONTENT_TYPE);
        let allow_origin = header_str(ACCESS_CONTROL_ALLOW_ORIGIN);

        if let Some(len) = header_str(CONTENT_LENGTH).and_then(|v| v.parse::<u64>().ok()) {
            check_size(len, self.max_bytes)?;
        }

        // One byte past the limit is enough to tell an oversized body apart.
        let mut bytes = Vec::new();
        response
            .take(self.max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        check_size(bytes.len() as u64, self.max_bytes)?;

        Ok(FetchedResource {
            bytes,
            content_type,
            allow_origin,
        })
    }
}
