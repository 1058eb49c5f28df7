//! Matte CLI - Batch background stripping and gray metrics for product images.
//!
//! Matte normalizes trees of product images onto fixed-size transparent
//! canvases and measures the average gray value of the non-transparent
//! pixels, aggregated per directory for cross-run comparison.
//!
//! # Usage
//!
//! ```bash
//! # Normalize a directory of images
//! matte process ./input/run1
//!
//! # Recurse into subdirectories, mirroring the tree under the output
//! matte process ./input/run1 --recursive
//!
//! # Measure normalized outputs and save a report
//! matte gray ./output/run1
//!
//! # View configuration
//! matte config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Matte - Batch background stripping, canvas normalization, and gray metrics.
#[derive(Parser, Debug)]
#[command(name = "matte")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize images: strip backgrounds and center on transparent canvases
    Process(cli::process::ProcessArgs),

    /// Measure average gray values of normalized images and write a report
    Gray(cli::gray::GrayArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match matte_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `matte config path`."
            );
            matte_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Matte v{}", matte_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Process(args) => cli::process::execute(args).await,
        Commands::Gray(args) => cli::gray::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
