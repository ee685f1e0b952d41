#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use image::{ImageFormat, Rgba, RgbaImage};

use inspector_core::config::{FetchConfig, InspectorConfig, ResampleFilter};
use inspector_core::error::{InspectorError, Result};
use inspector_core::load::Loader;
use inspector_core::source::{DataUrl, FetchedResource, Fetcher};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Encode a solid-color image as PNG bytes.
pub fn solid_png(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    encode_png(&RgbaImage::from_pixel(width, height, color))
}

pub fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("PNG encoding into memory");
    buf.into_inner()
}

/// A data URL for a solid-color PNG, as the file picker would produce.
pub fn solid_data_url(width: u32, height: u32, color: Rgba<u8>) -> String {
    DataUrl::encode("image/png", &solid_png(width, height, color))
}

/// Config that scales with nearest-neighbour so sampled colors stay exact.
pub fn nearest_config() -> InspectorConfig {
    let mut config = InspectorConfig::default();
    config.render.filter = ResampleFilter::Nearest;
    config
}

/// In-memory fetcher keyed by URL; unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct MockFetcher {
    resources: Mutex<HashMap<String, FetchedResource>>,
    pub requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn with(self, url: &str, resource: FetchedResource) -> Self {
        self.resources
            .lock()
            .unwrap()
            .insert(url.to_string(), resource);
        self
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedResource> {
        self.requests.lock().unwrap().push(url.to_string());
        self.resources
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| InspectorError::Fetch(format!("connection refused: {url}")))
    }
}

/// A PNG response, optionally carrying `Access-Control-Allow-Origin: *`.
pub fn png_resource(bytes: Vec<u8>, cors: bool) -> FetchedResource {
    FetchedResource {
        bytes,
        content_type: Some("image/png".into()),
        allow_origin: cors.then(|| "*".to_string()),
    }
}

pub fn mock_loader(fetcher: MockFetcher, config: FetchConfig) -> (Loader, Arc<MockFetcher>) {
    let fetcher = Arc::new(fetcher);
    let loader = Loader::with_fetcher(config, fetcher.clone());
    (loader, fetcher)
}

/// Loader with a fetcher that knows no URLs.
pub fn offline_loader() -> Loader {
    mock_loader(MockFetcher::default(), FetchConfig::default()).0
}
