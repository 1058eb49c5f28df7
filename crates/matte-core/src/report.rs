//! Report formatting for gray metric results.
//!
//! The plain-text layout is a compatibility contract: downstream tooling
//! parses one `name.png: value` line per file, so the line shape and the
//! two-decimal formatting must stay put. JSON is an alternative
//! serialization of the same report.

use serde::Serialize;
use std::io::{self, Write};

use crate::types::GrayReport;

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text: directory, overall mean, blank line, per-file lines
    Text,
    /// Single JSON object
    Json,
}

impl ReportFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A writer that serializes a gray report in the selected format.
///
/// A report is always written in one call, after aggregation has finished
/// in full, so the destination never holds a partial report.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer.
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    /// Write the complete report.
    pub fn write(&mut self, report: &GrayReport) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.writer, "{}", report.directory)?;
                writeln!(self.writer, "{:.2}", report.overall)?;
                writeln!(self.writer)?;
                for entry in &report.entries {
                    writeln!(self.writer, "{}: {:.2}", entry.name, entry.value)?;
                }
            }
            ReportFormat::Json => {
                self.write_json(report)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, item).map_err(io::Error::other)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GrayEntry;

    fn sample_report() -> GrayReport {
        GrayReport {
            directory: "./output/run1".to_string(),
            overall: 20.0,
            entries: vec![
                GrayEntry {
                    name: "a.png".to_string(),
                    value: 10.0,
                },
                GrayEntry {
                    name: "b.png".to_string(),
                    value: 123.456,
                },
            ],
        }
    }

    #[test]
    fn test_text_layout() {
        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer, ReportFormat::Text);
        writer.write(&sample_report()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "./output/run1\n20.00\n\na.png: 10.00\nb.png: 123.46\n"
        );
    }

    #[test]
    fn test_text_lines_match_downstream_pattern() {
        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer, ReportFormat::Text);
        writer.write(&sample_report()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        // Every per-file line is `name: number` with the .png extension kept
        for line in output.lines().skip(3) {
            let (name, value) = line.split_once(": ").unwrap();
            assert!(name.ends_with(".png"));
            value.parse::<f64>().unwrap();
        }
    }

    #[test]
    fn test_text_empty_report() {
        let report = GrayReport {
            directory: "./output/empty".to_string(),
            overall: 0.0,
            entries: vec![],
        };
        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer, ReportFormat::Text);
        writer.write(&report).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "./output/empty\n0.00\n\n");
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer, ReportFormat::Json);
        writer.write(&sample_report()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let parsed: GrayReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.overall, 20.0);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ReportFormat::parse("text"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::parse("TXT"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::parse("json"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("yaml"), None);
    }
}
