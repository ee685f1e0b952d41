use std::path::PathBuf;

use inspector_core::config::InspectorConfig;
use inspector_core::load::{LoadOutcome, LoadRequest};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Resolve and decode an image source.
    Load(LoadRequest),

    /// Read a picked file and encode it as a data URL.
    EncodeFile { path: PathBuf, max_bytes: u64 },

    /// Rebuild the loader after a config change.
    Reconfigure(InspectorConfig),
}

/// Results sent back to the UI thread.
pub enum WorkerResult {
    LoadFinished(LoadOutcome),
    SourceEncoded { path: PathBuf, data_url: String },
    ConfigImported { config: InspectorConfig },
    Error { message: String },
}
