use std::path::Path;
use std::sync::mpsc;

use inspector_core::config::InspectorConfig;
use inspector_core::load::{LoadRequest, Loader};
use inspector_core::source::DataUrl;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    loader: Loader,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("inspector-worker".into())
        .spawn(move || {
            worker_loop(loader, cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    mut loader: Loader,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Load(request) => {
                handle_load(&loader, request, &tx, &ctx);
            }
            WorkerCommand::EncodeFile { path, max_bytes } => {
                handle_encode_file(&path, max_bytes, &tx, &ctx);
            }
            WorkerCommand::Reconfigure(config) => {
                handle_reconfigure(&mut loader, &config, &tx, &ctx);
            }
        }
    }
}

fn handle_load(
    loader: &Loader,
    request: LoadRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    // Superseded while queued; the UI would drop the outcome anyway.
    if request.token.is_cancelled() {
        tracing::debug!(id = request.id.0, "skipping superseded load");
        return;
    }
    let outcome = loader.run(request);
    send(tx, ctx, WorkerResult::LoadFinished(outcome));
}

fn handle_encode_file(
    path: &Path,
    max_bytes: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match DataUrl::from_file(path, max_bytes) {
        Ok(data_url) => send(
            tx,
            ctx,
            WorkerResult::SourceEncoded {
                path: path.to_path_buf(),
                data_url,
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to read {}: {e}", path.display())),
    }
}

fn handle_reconfigure(
    loader: &mut Loader,
    config: &InspectorConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match Loader::new(config) {
        Ok(new_loader) => *loader = new_loader,
        Err(e) => send_error(tx, ctx, format!("Failed to apply config: {e}")),
    }
}
