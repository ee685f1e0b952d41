use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image source: {0}")]
    InvalidSource(String),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Cross-origin access denied for {0}")]
    CorsBlocked(String),

    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("Source too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("Image has zero size: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Load superseded by a newer request")]
    Cancelled,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InspectorError>;

/// Reasons a single-pixel readback can fail. Never shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadbackError {
    #[error("nothing has been drawn yet")]
    NothingDrawn,

    #[error("({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("position is not a finite number")]
    NotFinite,

    #[error("canvas has been tainted by cross-origin data")]
    Tainted,
}
