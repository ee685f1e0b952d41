pub mod config;
pub mod encode;
pub mod info;
pub mod sample;

use anyhow::{bail, Result};
use inspector_core::config::InspectorConfig;
use inspector_core::inspector::Inspector;
use inspector_core::load::Loader;

/// Load `source` into a fresh inspector, failing with the recorded error.
pub(crate) fn load_inspector(source: &str, config: &InspectorConfig) -> Result<Inspector> {
    let loader = Loader::new(config)?;
    let mut inspector = Inspector::new(config);
    inspector.set_source(source);
    inspector.load_with(&loader);

    if let Some(message) = inspector.state().error() {
        bail!("{message}: {source}");
    }
    Ok(inspector)
}
