//! Image sources: what the user typed or picked, and how it becomes bytes.
//!
//! A source string is parsed into one of three kinds:
//!
//! - `http://` / `https://` URLs, fetched through a [`Fetcher`],
//! - `data:` URLs, decoded in place (this is what the file picker stores),
//! - `file://` URLs and bare filesystem paths, read from disk.
//!
//! Remote bytes carry an [`Origin`]. Under [`CorsMode::NoCors`] a server that
//! does not send `Access-Control-Allow-Origin` still yields an image, but an
//! opaque one, and a canvas that draws it refuses pixel readback.

pub mod data_url;
pub mod fetch;

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{CorsMode, FetchConfig};
use crate::consts::GENERIC_CONTENT_TYPES;
use crate::error::{InspectorError, Result};

pub use data_url::DataUrl;
pub use fetch::{FetchedResource, Fetcher, HttpFetcher};

/// A parsed image source.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    Remote(String),
    DataUrl(DataUrl),
    LocalPath(PathBuf),
}

impl ImageSource {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InspectorError::InvalidSource("source is empty".into()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("data:") {
            return DataUrl::parse(trimmed).map(ImageSource::DataUrl);
        }
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(ImageSource::Remote(trimmed.to_string()));
        }
        if lower.starts_with("file://") {
            let path = url::Url::parse(trimmed)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| {
                    InspectorError::InvalidSource(format!("invalid file URL '{trimmed}'"))
                })?;
            return Ok(ImageSource::LocalPath(path));
        }
        if let Some((scheme, _)) = trimmed.split_once("://") {
            return Err(InspectorError::InvalidSource(format!(
                "unsupported scheme '{scheme}'"
            )));
        }

        Ok(ImageSource::LocalPath(PathBuf::from(trimmed)))
    }

    /// Short source kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::Remote(_) => "url",
            ImageSource::DataUrl(_) => "data-url",
            ImageSource::LocalPath(_) => "file",
        }
    }
}

/// Display never prints data URL payloads; they can be megabytes long.
impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Remote(url) => write!(f, "{url}"),
            ImageSource::DataUrl(data) => {
                write!(f, "data:{} ({} bytes)", data.mime, data.bytes.len())
            }
            ImageSource::LocalPath(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Text to show in an editable source field.
///
/// Data URLs are summarized as `data:<mime> (<n> bytes)`; anything else,
/// including input that does not parse, is shown as typed.
pub fn field_text(input: &str) -> Cow<'_, str> {
    let is_data_url = input
        .trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"));
    if is_data_url {
        if let Ok(source) = ImageSource::parse(input) {
            return Cow::Owned(source.to_string());
        }
    }
    Cow::Borrowed(input)
}

/// Whether pixels derived from a source may be read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Clean,
    Opaque,
}

/// Raw, undecoded source bytes.
#[derive(Clone, Debug)]
pub struct ResolvedSource {
    pub bytes: Vec<u8>,
    pub origin: Origin,
}

/// Turn a parsed source into bytes, enforcing the configured limits.
pub fn resolve(
    source: &ImageSource,
    fetcher: &dyn Fetcher,
    config: &FetchConfig,
) -> Result<ResolvedSource> {
    match source {
        ImageSource::Remote(url) => resolve_remote(url, fetcher, config),
        ImageSource::DataUrl(data) => {
            check_size(data.bytes.len() as u64, config.max_bytes)?;
            Ok(ResolvedSource {
                bytes: data.bytes.clone(),
                origin: Origin::Clean,
            })
        }
        ImageSource::LocalPath(path) => resolve_local(path, config),
    }
}

fn resolve_remote(url: &str, fetcher: &dyn Fetcher, config: &FetchConfig) -> Result<ResolvedSource> {
    let fetched = fetcher.fetch(url)?;
    check_size(fetched.bytes.len() as u64, config.max_bytes)?;

    if let Some(ref content_type) = fetched.content_type {
        if !is_image_content_type(content_type) {
            return Err(InspectorError::NotAnImage(content_type.clone()));
        }
    }

    let origin = match (fetched.allow_origin.is_some(), config.cors) {
        (true, _) => Origin::Clean,
        (false, CorsMode::NoCors) => Origin::Opaque,
        (false, CorsMode::Anonymous) => return Err(InspectorError::CorsBlocked(url.to_string())),
    };

    Ok(ResolvedSource {
        bytes: fetched.bytes,
        origin,
    })
}

fn resolve_local(path: &Path, config: &FetchConfig) -> Result<ResolvedSource> {
    let metadata = std::fs::metadata(path)?;
    check_size(metadata.len(), config.max_bytes)?;
    let bytes = std::fs::read(path)?;
    Ok(ResolvedSource {
        bytes,
        origin: Origin::Clean,
    })
}

pub(crate) fn check_size(size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(InspectorError::TooLarge { size, limit });
    }
    Ok(())
}

/// `image/*`, or one of the generic binary types some servers use for images.
pub fn is_image_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence.starts_with("image/") || GENERIC_CONTENT_TYPES.contains(&essence.as_str())
}
