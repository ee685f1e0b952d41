use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::{FetchConfig, InspectorConfig};
use crate::decode::{decode, DecodedImage};
use crate::error::{InspectorError, Result};
use crate::source::{self, Fetcher, HttpFetcher, ImageSource};
use crate::state::LoadId;

/// Hands out increasing load ids and the tokens that watch them.
#[derive(Clone, Debug, Default)]
pub struct LoadTicketer {
    latest: Arc<AtomicU64>,
}

impl LoadTicketer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id. Every token issued earlier becomes cancelled.
    pub fn next(&self) -> (LoadId, CancelToken) {
        let id = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let token = CancelToken {
            id,
            latest: Arc::clone(&self.latest),
        };
        (LoadId(id), token)
    }
}

/// Reports whether a newer load has been requested since this one.
#[derive(Clone, Debug)]
pub struct CancelToken {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.id
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(InspectorError::Cancelled);
        }
        Ok(())
    }
}

/// A load waiting to be executed, possibly on another thread.
#[derive(Clone, Debug)]
pub struct LoadRequest {
    pub id: LoadId,
    pub source: String,
    pub token: CancelToken,
}

/// Result of executing a [`LoadRequest`].
#[derive(Debug)]
pub struct LoadOutcome {
    pub id: LoadId,
    pub result: Result<DecodedImage>,
}

/// Resolves and decodes sources.
#[derive(Clone)]
pub struct Loader {
    config: FetchConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl Loader {
    /// Loader with the default HTTP fetcher.
    pub fn new(config: &InspectorConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::with_fetcher(config.fetch.clone(), Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: FetchConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Parse, resolve and decode `source`, giving up at the first checkpoint
    /// after `token` has been cancelled.
    pub fn load(&self, source: &str, token: &CancelToken) -> Result<DecodedImage> {
        token.check()?;
        let parsed = ImageSource::parse(source)?;
        tracing::info!(kind = parsed.kind(), source = %parsed, "loading image");

        let resolved = source::resolve(&parsed, self.fetcher.as_ref(), &self.config)?;
        token.check()?;

        let image = decode(resolved)?;
        token.check()?;
        Ok(image)
    }

    pub fn run(&self, request: LoadRequest) -> LoadOutcome {
        let result = self.load(&request.source, &request.token);
        LoadOutcome {
            id: request.id,
            result,
        }
    }
}
