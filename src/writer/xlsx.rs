//! Excel workbook emission via rust_xlsxwriter

use crate::error::{WriteError, WriteResult};
use crate::export::shape::ShapedRows;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Write shaped rows to an .xlsx workbook with one worksheet.
///
/// The header row is bold and every column is widened to fit its longest
/// cell. The save is one atomic call; a failed save leaves no partial file
/// handle behind.
pub fn write_xlsx(shaped: &ShapedRows, output_path: &Path, sheet_name: &str) -> WriteResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| WriteError::worksheet(e.to_string()))?;

    for (col, header) in shaped.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header.as_str(), &bold)?;
    }

    for (row, cells) in shaped.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string((row + 1) as u32, col as u16, cell.as_str())?;
        }
    }

    for (col, width) in shaped.column_widths().iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    workbook
        .save(output_path)
        .map_err(|e| WriteError::save_failed(e.to_string()))?;

    Ok(())
}
