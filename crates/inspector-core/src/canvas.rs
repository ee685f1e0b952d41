use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::color::{PixelCoord, SampledColor};
use crate::decode::DecodedImage;
use crate::error::ReadbackError;
use crate::geometry::{CanvasBox, FitGeometry};
use crate::source::Origin;

/// The fixed-size raster images are drawn into and sampled from.
///
/// Each successful [`Canvas::draw`] clears the surface first, so only the
/// latest image is ever visible. Drawing an [`Origin::Opaque`] image taints
/// the canvas until the next clean draw.
pub struct Canvas {
    bounds: CanvasBox,
    raster: RgbaImage,
    drawn: bool,
    tainted: bool,
    revision: u64,
}

impl Canvas {
    pub fn new(bounds: CanvasBox) -> Self {
        Self {
            bounds,
            raster: RgbaImage::new(bounds.width, bounds.height),
            drawn: false,
            tainted: false,
            revision: 0,
        }
    }

    pub fn bounds(&self) -> CanvasBox {
        self.bounds
    }

    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    pub fn is_tainted(&self) -> bool {
        self.tainted
    }

    /// Incremented on every draw; lets views re-upload only when needed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clear the surface and draw `image` scaled into `fit`.
    pub fn draw(&mut self, image: &DecodedImage, fit: &FitGeometry, filter: FilterType) {
        let (x, y, w, h) = fit.pixel_rect();
        let w = w.min(self.bounds.width);
        let h = h.min(self.bounds.height);
        let scaled = imageops::resize(&image.pixels, w, h, filter);

        self.raster = RgbaImage::from_pixel(self.bounds.width, self.bounds.height, Rgba([0, 0, 0, 0]));
        imageops::overlay(&mut self.raster, &scaled, x as i64, y as i64);

        self.drawn = true;
        self.tainted = image.origin == Origin::Opaque;
        self.revision += 1;
    }

    /// Read the single pixel under a canvas-relative position.
    ///
    /// Fractional positions are floored, matching how a 1x1 readback at a
    /// sub-pixel offset resolves to the pixel containing it.
    pub fn read_pixel(&self, x: f32, y: f32) -> Result<(SampledColor, PixelCoord), ReadbackError> {
        if !self.drawn {
            return Err(ReadbackError::NothingDrawn);
        }
        if self.tainted {
            return Err(ReadbackError::Tainted);
        }

        if !x.is_finite() || !y.is_finite() {
            return Err(ReadbackError::NotFinite);
        }

        let px = x.floor() as i64;
        let py = y.floor() as i64;
        let in_bounds = (0..self.bounds.width as i64).contains(&px)
            && (0..self.bounds.height as i64).contains(&py);
        if !in_bounds {
            return Err(ReadbackError::OutOfBounds {
                x: px,
                y: py,
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }

        let coord = PixelCoord::new(px as u32, py as u32);
        let color = SampledColor::from(*self.raster.get_pixel(coord.x, coord.y));
        Ok((color, coord))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasBox::FIXED)
    }
}
