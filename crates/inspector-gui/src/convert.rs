use inspector_core::canvas::Canvas;

/// Copy the canvas raster into an egui ColorImage.
pub fn canvas_to_color_image(canvas: &Canvas) -> egui::ColorImage {
    let raster = canvas.raster();
    let size = [raster.width() as usize, raster.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, raster.as_raw())
}
