use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Intrinsic pixel dimensions of a decoded image. Zero until a load succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The fixed drawing surface an image is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasBox {
    pub width: u32,
    pub height: u32,
}

impl CanvasBox {
    /// The 400x300 box every image is drawn into.
    pub const FIXED: CanvasBox = CanvasBox {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };
}

impl Default for CanvasBox {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Scaled size and centering offsets for drawing an image into a box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitGeometry {
    pub scaled_width: f64,
    pub scaled_height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl FitGeometry {
    /// Fit `natural` into `canvas`, width first.
    ///
    /// The candidate size uses the full box width; if the resulting height
    /// overflows the box, the height is pinned to the box instead. Returns
    /// `None` for an image with a zero dimension.
    pub fn fit(natural: NaturalSize, canvas: CanvasBox) -> Option<Self> {
        if natural.is_empty() {
            return None;
        }

        let w = natural.width as f64;
        let h = natural.height as f64;
        let bw = canvas.width as f64;
        let bh = canvas.height as f64;

        let mut scaled_width = bw;
        let mut scaled_height = bw * h / w;
        if scaled_height > bh {
            scaled_height = bh;
            scaled_width = bh * w / h;
        }

        Some(Self {
            scaled_width,
            scaled_height,
            x_offset: (bw - scaled_width) / 2.0,
            y_offset: (bh - scaled_height) / 2.0,
        })
    }

    /// Destination rectangle snapped to whole pixels: `(x, y, width, height)`.
    ///
    /// Width and height are at least one pixel so that extreme aspect ratios
    /// still leave a visible line.
    pub fn pixel_rect(&self) -> (u32, u32, u32, u32) {
        let x = self.x_offset.round().max(0.0) as u32;
        let y = self.y_offset.round().max(0.0) as u32;
        let w = (self.scaled_width.round() as u32).max(1);
        let h = (self.scaled_height.round() as u32).max(1);
        (x, y, w, h)
    }
}
