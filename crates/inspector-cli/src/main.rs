mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inspector_core::config::InspectorConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inspector", about = "Image size and pixel color inspector")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file (see `inspector config`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an image and show its natural size and canvas fit
    Info(commands::info::InfoArgs),
    /// Load an image and sample canvas pixels
    Sample(commands::sample::SampleArgs),
    /// Print the data URL for a local image file
    Encode(commands::encode::EncodeArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match cli.config {
        Some(ref path) => InspectorConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => InspectorConfig::default(),
    };

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Sample(args) => commands::sample::run(args, &config),
        Commands::Encode(args) => commands::encode::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
