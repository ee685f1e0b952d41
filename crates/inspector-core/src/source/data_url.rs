use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{InspectorError, Result};
use crate::source::check_size;

/// MIME type assumed when a data URL omits one.
const DEFAULT_MIME: &str = "text/plain";

/// A decoded `data:` URL.
#[derive(Clone, Debug, PartialEq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Parse `data:[<mime>][;param]*[;base64],<payload>`.
    ///
    /// Non-base64 payloads are taken verbatim; percent-escapes are not decoded.
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("data:"))
            .map(|_| &input[5..])
            .ok_or_else(|| InspectorError::InvalidDataUrl("missing 'data:' prefix".into()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| InspectorError::InvalidDataUrl("missing ',' separator".into()))?;

        let mut params = header.split(';');
        let mime = match params.next().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_ascii_lowercase(),
            _ => DEFAULT_MIME.to_string(),
        };
        let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

        let bytes = if is_base64 {
            let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            BASE64
                .decode(compact.as_bytes())
                .map_err(|e| InspectorError::InvalidDataUrl(format!("bad base64 payload: {e}")))?
        } else {
            payload.as_bytes().to_vec()
        };

        Ok(Self { mime, bytes })
    }

    /// Build a base64 data URL.
    pub fn encode(mime: &str, bytes: &[u8]) -> String {
        format!("data:{mime};base64,{}", BASE64.encode(bytes))
    }

    /// Read an image file and encode it the way the file picker stores it.
    ///
    /// The MIME type is sniffed from the content, not the extension; files that
    /// do not sniff as images are rejected.
    pub fn from_file(path: &Path, max_bytes: u64) -> Result<String> {
        let metadata = std::fs::metadata(path)?;
        check_size(metadata.len(), max_bytes)?;

        let bytes = std::fs::read(path)?;
        let mime = sniff_image_mime(&bytes)
            .ok_or_else(|| InspectorError::NotAnImage(path.display().to_string()))?;

        tracing::debug!(path = %path.display(), mime, size = bytes.len(), "encoded file as data URL");
        Ok(Self::encode(mime, &bytes))
    }
}

/// MIME type of `bytes` if they look like an image.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .map(|kind| kind.mime_type())
}
