//! The `matte gray` command for measuring normalized images.

use clap::{Args, ValueEnum};
use matte_core::{Config, GrayAggregator, ReportFormat, ReportWriter};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Arguments for the `gray` command.
#[derive(Args, Debug)]
pub struct GrayArgs {
    /// Directory of normalized images to measure
    #[arg(required = true)]
    pub input: PathBuf,

    /// Report file (defaults to `<result dir>/<input dirname>.txt`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Report format choices.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    /// Plain text, one `name.png: value` line per file
    Text,
    /// Single JSON object
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Execute the gray command.
pub async fn execute(args: GrayArgs) -> anyhow::Result<()> {
    if !args.input.is_dir() {
        anyhow::bail!(
            "Input directory does not exist: {:?}\n\n  Hint: Run `matte process` first to produce normalized images.",
            args.input
        );
    }

    let config = Config::load()?;

    // Aggregate fully before touching the report file, so a failure here
    // never leaves a partial report behind.
    let report = GrayAggregator::aggregate(&args.input)?;
    tracing::info!(
        "Measured {} image(s), overall gray {:.2}",
        report.entries.len(),
        report.overall
    );

    let output_path = match args.output {
        Some(path) => path,
        None => default_report_path(&config, &args.input, args.format),
    };
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(&output_path)?;
    let mut writer = ReportWriter::new(BufWriter::new(file), args.format.into());
    writer.write(&report)?;
    writer.flush()?;

    tracing::info!("Report written to {:?}", output_path);
    println!("{:.2}", report.overall);

    Ok(())
}

/// Default report location: the configured result directory, named after
/// the measured directory.
fn default_report_path(config: &Config, input: &Path, format: FormatArg) -> PathBuf {
    let dirname = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("report");
    let extension = match format {
        FormatArg::Text => "txt",
        FormatArg::Json => "json",
    };
    config.result_dir().join(format!("{dirname}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_path_uses_dirname() {
        let config = Config::default();
        let path = default_report_path(&config, &PathBuf::from("./output/run1"), FormatArg::Text);
        assert_eq!(path, PathBuf::from("./result/run1.txt"));
    }

    #[test]
    fn test_default_report_path_json_extension() {
        let config = Config::default();
        let path = default_report_path(&config, &PathBuf::from("./output/run1"), FormatArg::Json);
        assert_eq!(path, PathBuf::from("./result/run1.json"));
    }
}
