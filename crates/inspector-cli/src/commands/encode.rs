use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use inspector_core::config::InspectorConfig;
use inspector_core::source::DataUrl;

#[derive(Args)]
pub struct EncodeArgs {
    /// Local image file
    pub file: PathBuf,
}

pub fn run(args: &EncodeArgs, config: &InspectorConfig) -> Result<()> {
    let data_url = DataUrl::from_file(&args.file, config.fetch.max_bytes)
        .with_context(|| format!("Failed to encode {}", args.file.display()))?;
    println!("{data_url}");
    Ok(())
}
