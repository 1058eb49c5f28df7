//! The `matte process` command for batch normalization.

use clap::Args;
use matte_core::{Config, Normalizer, PassthroughRemover};
use std::path::PathBuf;

/// Arguments for the `process` command.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Directory of source images to normalize
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output directory (defaults to the configured output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Recurse into subdirectories, mirroring the tree under the output
    #[arg(short, long)]
    pub recursive: bool,

    /// Canvas side length in pixels
    #[arg(long)]
    pub canvas_size: Option<u32>,
}

/// Execute the process command.
pub async fn execute(args: ProcessArgs) -> anyhow::Result<()> {
    // Validate input path exists
    if !args.input.is_dir() {
        anyhow::bail!(
            "Input directory does not exist: {:?}\n\n  Hint: Check the path and try again.",
            args.input
        );
    }

    // Load configuration and apply CLI overrides
    let mut config = Config::load()?;
    if let Some(size) = args.canvas_size {
        anyhow::ensure!(size > 0, "--canvas-size must be > 0");
        config.canvas.size = size;
    }
    let output_root = args.output.clone().unwrap_or_else(|| config.output_dir());

    let normalizer = Normalizer::new(&config, Box::new(PassthroughRemover));

    let entries = normalizer.discover(&args.input, args.recursive)?;
    if entries.is_empty() {
        tracing::warn!("No supported image files found at {:?}", args.input);
        return Ok(());
    }
    tracing::info!("Found {} image(s) to process", entries.len());

    let dest_root = Normalizer::destination_root(&args.input, &output_root);

    // Set up progress bar
    let progress = create_progress_bar(entries.len() as u64);

    let mut succeeded: u64 = 0;
    let mut failed: u64 = 0;
    let start_time = std::time::Instant::now();

    for entry in &entries {
        match normalizer.process_entry(entry, &dest_root).await {
            Ok(_) => succeeded += 1,
            Err(e) => {
                failed += 1;
                tracing::error!("Failed: {:?} - {}", entry.path, e);
            }
        }

        // Update progress bar with rate
        progress.inc(1);
        let elapsed = start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            let rate = (succeeded + failed) as f64 / elapsed;
            progress.set_message(format!("{:.1} img/sec", rate));
        }
    }

    let elapsed = start_time.elapsed();
    let rate = if elapsed.as_secs_f64() > 0.0 {
        succeeded as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    progress.finish_and_clear();

    tracing::info!("Normalized output written under {:?}", dest_root);
    print_summary(succeeded, failed, elapsed, rate);

    Ok(())
}

/// Create a progress bar for batch processing.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("starting...");
    pb
}

/// Print a formatted summary table after batch processing.
fn print_summary(succeeded: u64, failed: u64, elapsed: std::time::Duration, rate: f64) {
    let total = succeeded + failed;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", succeeded);
    if failed > 0 {
        eprintln!("    Failed:       {:>8}", failed);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", total);
    eprintln!("    Duration:     {:>7.1}s", elapsed.as_secs_f64());
    eprintln!("    Rate:         {:>7.1} img/sec", rate);
    eprintln!("  ====================================");
}
