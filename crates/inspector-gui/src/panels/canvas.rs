use crate::app::InspectorApp;

/// Draw the fixed-size canvas and route pointer input over it to the inspector.
///
/// Pointer handling lives here, once per frame, so there is exactly one
/// route for canvas input however many images have been loaded.
pub fn show(ui: &mut egui::Ui, app: &mut InspectorApp) {
    let bounds = app.inspector.canvas().bounds();
    let size = egui::vec2(bounds.width as f32, bounds.height as f32);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    ui.painter()
        .rect_stroke(rect, 0.0, ui.visuals().widgets.noninteractive.bg_stroke, egui::StrokeKind::Outside);
    if let Some(ref texture) = app.canvas_view.texture {
        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    handle_hover(&response, rect, app);
    handle_click(&response, rect, app);
}

fn handle_hover(response: &egui::Response, rect: egui::Rect, app: &mut InspectorApp) {
    let hover_pos = response.hover_pos().filter(|pos| rect.contains(*pos));
    let hovered = hover_pos.is_some();

    // Entering is ignored until an image is drawn, so keep re-sending it.
    if hovered && !app.inspector.state().is_hovering() {
        app.inspector.pointer_entered();
    }
    if !hovered && app.canvas_view.hovered {
        app.inspector.pointer_left();
        app.canvas_view.last_hover_pos = None;
    }
    app.canvas_view.hovered = hovered;

    if let Some(pos) = hover_pos {
        if app.canvas_view.last_hover_pos != Some(pos) {
            let rel = pos - rect.min;
            app.inspector.pointer_moved(rel.x, rel.y);
            app.canvas_view.last_hover_pos = Some(pos);
        }
    }
}

fn handle_click(response: &egui::Response, rect: egui::Rect, app: &mut InspectorApp) {
    if !response.clicked() {
        return;
    }
    if let Some(pos) = response.interact_pointer_pos() {
        let rel = pos - rect.min;
        app.inspector.pointer_clicked(rel.x, rel.y);
    }
}
