mod app;
mod convert;
mod messages;
mod panels;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 720.0])
            .with_min_inner_size([440.0, 560.0])
            .with_title("Image Inspector"),
        ..Default::default()
    };

    eframe::run_native(
        "ImageInspector",
        options,
        Box::new(|cc| Ok(Box::new(app::InspectorApp::new(&cc.egui_ctx)?))),
    )
}
