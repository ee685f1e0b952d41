use std::sync::mpsc;

use inspector_core::config::InspectorConfig;
use inspector_core::inspector::Inspector;
use inspector_core::load::Loader;
use inspector_core::source;

use crate::convert::canvas_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::worker;

/// GPU copy of the inspector canvas and the pointer state seen last frame.
#[derive(Default)]
pub struct CanvasView {
    pub texture: Option<egui::TextureHandle>,
    /// Canvas revision the texture was uploaded from.
    pub uploaded_revision: u64,
    pub hovered: bool,
    pub last_hover_pos: Option<egui::Pos2>,
}

pub struct InspectorApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub inspector: Inspector,
    pub config: InspectorConfig,
    /// Text field contents. Data URLs are only summarized here; the full
    /// source lives in the inspector state.
    pub source_input: String,
    pub canvas_view: CanvasView,
    pub show_about: bool,
}

impl InspectorApp {
    pub fn new(ctx: &egui::Context) -> anyhow::Result<Self> {
        let config = InspectorConfig::default();
        let loader = Loader::new(&config)?;
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(loader, result_tx.clone(), ctx.clone());

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            inspector: Inspector::new(&config),
            config,
            source_input: String::new(),
            canvas_view: CanvasView::default(),
            show_about: false,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::LoadFinished(outcome) => {
                    self.inspector.complete_load(outcome);
                }
                WorkerResult::SourceEncoded { path, data_url } => {
                    tracing::info!(path = %path.display(), "image file selected");
                    self.set_source(data_url);
                }
                WorkerResult::ConfigImported { config } => {
                    tracing::info!(?config, "config imported");
                    self.apply_config(config);
                }
                WorkerResult::Error { message } => {
                    tracing::warn!("{message}");
                }
            }
        }
    }

    /// Re-upload the canvas texture if the canvas was redrawn.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let canvas = self.inspector.canvas();
        if !canvas.is_drawn() || canvas.revision() == self.canvas_view.uploaded_revision {
            return;
        }

        let image = canvas_to_color_image(canvas);
        match self.canvas_view.texture {
            Some(ref mut texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.canvas_view.texture =
                    Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
            }
        }
        self.canvas_view.uploaded_revision = canvas.revision();
    }

    pub fn set_source(&mut self, source: String) {
        self.source_input = source::field_text(&source).into_owned();
        self.inspector.set_source(source);
    }

    pub fn request_load(&mut self) {
        let request = self.inspector.request_load();
        self.send_command(WorkerCommand::Load(request));
    }

    pub fn apply_config(&mut self, config: InspectorConfig) {
        self.inspector.apply_config(&config);
        self.send_command(WorkerCommand::Reconfigure(config.clone()));
        self.config = config;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for InspectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.sync_texture(ctx);

        panels::menu_bar::show(ctx, self);
        panels::inspector::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Image Inspector")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Image Inspector");
                        ui.label("Image size and pixel color sampling");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use inspector_core::source::DataUrl;

    use super::*;

    #[test]
    fn test_picked_file_source_stays_out_of_text_field() {
        let ctx = egui::Context::default();
        let mut app = InspectorApp::new(&ctx).unwrap();
        let data_url = DataUrl::encode("image/png", &vec![0u8; 1 << 20]);

        app.result_tx
            .send(WorkerResult::SourceEncoded {
                path: "photo.png".into(),
                data_url: data_url.clone(),
            })
            .unwrap();
        app.poll_results();

        assert_eq!(app.source_input, "data:image/png (1048576 bytes)");
        assert_eq!(app.inspector.state().source(), data_url);
    }

    #[test]
    fn test_typed_url_is_shown_as_is() {
        let ctx = egui::Context::default();
        let mut app = InspectorApp::new(&ctx).unwrap();
        app.set_source("https://example.com/a.png".to_string());
        assert_eq!(app.source_input, "https://example.com/a.png");
        assert_eq!(app.inspector.state().source(), "https://example.com/a.png");
    }
}
