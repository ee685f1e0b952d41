use image::RgbaImage;

use crate::error::{InspectorError, Result};
use crate::geometry::NaturalSize;
use crate::source::{Origin, ResolvedSource};

/// A decoded image ready to be drawn.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub pixels: RgbaImage,
    pub origin: Origin,
}

impl DecodedImage {
    pub fn new(pixels: RgbaImage, origin: Origin) -> Self {
        Self { pixels, origin }
    }

    /// Intrinsic size, independent of how the image is later displayed.
    pub fn natural_size(&self) -> NaturalSize {
        let (width, height) = self.pixels.dimensions();
        NaturalSize::new(width, height)
    }
}

/// Decode source bytes, guessing the format from the content.
pub fn decode(source: ResolvedSource) -> Result<DecodedImage> {
    let img = image::load_from_memory(&source.bytes)?;
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(InspectorError::EmptyImage { width, height });
    }

    Ok(DecodedImage::new(img.to_rgba8(), source.origin))
}
