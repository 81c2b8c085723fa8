//! Spreadsheet emission backends

pub mod csv;
pub mod xlsx;

use crate::error::WriteResult;
use crate::export::config::{ExportConfig, OutputFormat};
use crate::export::shape::ShapedRows;
use std::path::Path;

/// Write shaped rows to the given path using the configured format
pub fn write_spreadsheet(
    shaped: &ShapedRows,
    output_path: &Path,
    config: &ExportConfig,
) -> WriteResult<()> {
    match config.format {
        OutputFormat::Xlsx => xlsx::write_xlsx(shaped, output_path, &config.sheet_name),
        OutputFormat::Csv => csv::write_csv(shaped, output_path),
    }
}
