use inspector_core::color::Sample;
use inspector_core::consts::SWATCH_SIZE;
use inspector_core::labels;
use inspector_core::state::InspectorState;

pub fn show_error(ui: &mut egui::Ui, state: &InspectorState) {
    if let Some(message) = state.error() {
        ui.colored_label(ui.visuals().error_fg_color, message);
    }
}

pub fn show_size(ui: &mut egui::Ui, state: &InspectorState) {
    if !state.shows_size() {
        return;
    }
    let size = state.natural_size();
    ui.label(labels::SIZE_HEADING);
    ui.label(labels::width_line(size));
    ui.label(labels::height_line(size));
}

/// Hover and click readouts. The hover reading stays visible while a click
/// is latched, even after the pointer has left the canvas.
pub fn show_samples(ui: &mut egui::Ui, state: &InspectorState) {
    if !state.shows_sample_panel() {
        return;
    }

    ui.group(|ui| {
        if let Some(hover) = state.hover_sample() {
            swatch(ui, hover);
            ui.label(labels::hovered_line(hover));
            ui.label(labels::coordinates_line(hover));
        }
        if let Some(click) = state.click_sample() {
            ui.label(labels::clicked_line(click));
            swatch(ui, click);
            ui.label(labels::coordinates_line(click));
        }
    });
}

fn swatch(ui: &mut egui::Ui, sample: &Sample) {
    let [r, g, b] = sample.color.rgb();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, egui::Color32::from_rgb(r, g, b));
}
