/// Width of the drawing surface in logical pixels.
pub const CANVAS_WIDTH: u32 = 400;

/// Height of the drawing surface in logical pixels.
pub const CANVAS_HEIGHT: u32 = 300;

/// Message stored in the error state whenever a load fails, whatever the cause.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load image";

/// Default cap on fetched, read or data-URL-decoded source bytes (32 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 32 * 1024 * 1024;

/// Default timeout for remote fetches.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Edge length of the color swatch next to a sample readout.
pub const SWATCH_SIZE: f32 = 20.0;

/// MIME types accepted as image content from a remote server besides `image/*`.
/// Some servers label images generically.
pub const GENERIC_CONTENT_TYPES: &[&str] = &["application/octet-stream", "binary/octet-stream"];

/// File extensions offered by the image file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "tga", "pnm", "qoi",
];
