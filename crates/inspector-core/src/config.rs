use std::fmt;
use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_SOURCE_BYTES};
use crate::error::{InspectorError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl InspectorConfig {
    /// Read a TOML config file. Missing sections and keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| InspectorError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| InspectorError::Config(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    /// Upper bound on source bytes, whatever the source kind.
    pub max_bytes: u64,
    pub user_agent: String,
    pub cors: CorsMode,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_bytes: DEFAULT_MAX_SOURCE_BYTES,
            user_agent: concat!("inspector/", env!("CARGO_PKG_VERSION")).to_string(),
            cors: CorsMode::default(),
        }
    }
}

/// How remote images are treated when the server does not opt in to
/// cross-origin access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorsMode {
    /// Require `Access-Control-Allow-Origin`; without it the load fails.
    #[default]
    Anonymous,
    /// Load regardless, but the drawn canvas refuses pixel readback.
    NoCors,
}

impl fmt::Display for CorsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorsMode::Anonymous => write!(f, "Anonymous"),
            CorsMode::NoCors => write!(f, "No CORS"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub filter: ResampleFilter,
}

/// Resampling filter used when scaling an image into the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Triangle => write!(f, "Triangle"),
            ResampleFilter::CatmullRom => write!(f, "Catmull-Rom"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
