//! CSV emission for the same shaped rows as the xlsx backend

use crate::error::{WriteError, WriteResult};
use crate::export::shape::ShapedRows;
use std::path::Path;

/// Write shaped rows as RFC 4180 CSV, header row first
pub fn write_csv(shaped: &ShapedRows, output_path: &Path) -> WriteResult<()> {
    let writer = csv::Writer::from_path(output_path)?;
    write_records(shaped, writer)
}

/// Write shaped rows as CSV to any writer (used for stdout output)
pub fn write_csv_to<W: std::io::Write>(shaped: &ShapedRows, out: W) -> WriteResult<()> {
    write_records(shaped, csv::Writer::from_writer(out))
}

fn write_records<W: std::io::Write>(
    shaped: &ShapedRows,
    mut writer: csv::Writer<W>,
) -> WriteResult<()> {
    writer.write_record(&shaped.headers)?;
    for row in &shaped.rows {
        writer.write_record(row)?;
    }

    writer
        .flush()
        .map_err(|e| WriteError::save_failed(e.to_string()))?;

    Ok(())
}
