use inspector_core::labels;

use crate::app::InspectorApp;
use crate::panels::menu_bar::open_image;

/// URL field, file picker and load trigger.
pub fn show(ui: &mut egui::Ui, app: &mut InspectorApp) {
    ui.horizontal(|ui| {
        let field = egui::TextEdit::singleline(&mut app.source_input)
            .hint_text(labels::URL_HINT)
            .desired_width(ui.available_width() - 90.0);
        // Only real edits reach the inspector, so a summarized data URL
        // never replaces the stored source unless the user types over it.
        if ui.add(field).changed() {
            let source = app.source_input.clone();
            app.inspector.set_source(source);
        }

        if ui.button(labels::BROWSE_BUTTON).clicked() {
            open_image(app);
        }
    });

    ui.horizontal(|ui| {
        if ui.button(labels::LOAD_BUTTON).clicked() {
            app.request_load();
        }
        if app.inspector.state().is_loading() {
            ui.spinner();
        }
    });
}
