use anyhow::Result;
use clap::Args;
use console::style;
use inspector_core::config::InspectorConfig;
use inspector_core::labels;

use super::load_inspector;

#[derive(Args)]
pub struct InfoArgs {
    /// Image URL, data URL or file path
    pub source: String,
}

pub fn run(args: &InfoArgs, config: &InspectorConfig) -> Result<()> {
    let inspector = load_inspector(&args.source, config)?;
    let state = inspector.state();
    let size = state.natural_size();

    println!("{}", style(labels::SIZE_HEADING).bold());
    println!("{}", labels::width_line(size));
    println!("{}", labels::height_line(size));

    if let Some(fit) = state.fit() {
        let bounds = inspector.canvas().bounds();
        println!();
        println!("Canvas:      {}x{}", bounds.width, bounds.height);
        println!("Scaled:      {:.2}x{:.2}", fit.scaled_width, fit.scaled_height);
        println!("Offset:      {:.2}, {:.2}", fit.x_offset, fit.y_offset);
    }
    if inspector.canvas().is_tainted() {
        println!("{}", style("Pixel readback disabled (cross-origin image)").yellow());
    }

    Ok(())
}
