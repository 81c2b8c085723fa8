//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ExportError, ExportErrorKind};
use crate::export::config::{ExportConfig, OutputFormat, DEFAULT_PREVIEW_ROWS, DEFAULT_SHEET_NAME};
use crate::export::{ExportResult, ShapedRows};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "postman2xlsx")]
#[command(about = "Export a Postman collection to a flat spreadsheet")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input collection (JSON file, directory, or inline JSON string)
    #[arg()]
    pub input: Option<String>,

    /// Output file path (directory in batch mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read the collection JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Output format: xlsx or csv (default: xlsx)
    #[arg(long)]
    pub format: Option<Format>,

    /// Worksheet title (default: "Postman URLs")
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Number of extracted rows to preview (default: 5)
    #[arg(long)]
    pub preview: Option<usize>,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Output export statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue exporting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone)]
pub enum Format {
    #[value(name = "xlsx", alias = "excel")]
    Xlsx,
    #[value(name = "csv")]
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xlsx => OutputFormat::Xlsx,
            Format::Csv => OutputFormat::Csv,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub export_config: ExportConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ExportResult<Self> {
        let export_config = Self::create_export_config(&args)?;

        Ok(Self {
            args,
            export_config,
        })
    }

    /// Create export configuration from CLI arguments
    fn create_export_config(args: &Args) -> ExportResult<ExportConfig> {
        let format = args
            .format
            .as_ref()
            .map(|f| f.clone().into())
            .unwrap_or_default();

        let config = ExportConfig {
            format,
            sheet_name: args
                .sheet_name
                .clone()
                .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            preview_rows: args.preview.unwrap_or(DEFAULT_PREVIEW_ROWS),
            recursive: args.recursive,
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| ExportError::export(ExportErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(input) = &self.args.input {
            format!("'{}'", input)
        } else {
            "no input specified".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Print a preview of up to `limit` extracted rows (if not in quiet mode)
    pub fn show_preview(shaped: &ShapedRows, limit: usize, quiet: bool) {
        if quiet || limit == 0 || shaped.rows.is_empty() {
            return;
        }

        println!("Sample extracted requests:");
        let styled = Self::should_use_color();
        for row in shaped.rows.iter().take(limit) {
            let line = row.join(" | ");
            if styled {
                println!("  {}", console::style(line).dim());
            } else {
                println!("  {}", line);
            }
        }
        if shaped.rows.len() > limit {
            println!("  ... and {} more", shaped.rows.len() - limit);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}
