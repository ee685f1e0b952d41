use crate::app::InspectorApp;
use crate::panels::{canvas, readouts, source_bar};

pub fn show(ctx: &egui::Context, app: &mut InspectorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            source_bar::show(ui, app);
            ui.add_space(6.0);

            readouts::show_error(ui, app.inspector.state());
            readouts::show_size(ui, app.inspector.state());
            ui.add_space(6.0);

            canvas::show(ui, app);
            ui.add_space(6.0);

            readouts::show_samples(ui, app.inspector.state());
        });
    });
}
