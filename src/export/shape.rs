//! Row shaping: pad folder paths to a rectangle and derive headers

use crate::export::flatten::FlatRecord;

/// Fixed trailing columns after the folder levels
const FIXED_HEADERS: [&str; 3] = ["Request Name", "Method", "URL"];

/// Rectangular output: headers plus one row of cells per request
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRows {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ShapedRows {
    /// Maximum folder depth across all shaped rows
    pub fn folder_depth(&self) -> usize {
        self.headers.len() - FIXED_HEADERS.len()
    }

    /// Number of data rows (excluding the header)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Width for each column: longest cell text (header included) plus two
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                if len > widths[i] {
                    widths[i] = len;
                }
            }
        }
        widths.iter().map(|w| w + 2).collect()
    }
}

/// Shape flat records into a rectangle.
///
/// Every record's folder path is right-padded with empty strings to the
/// maximum folder depth observed, so deeper levels are blank rather than the
/// shallow ones.
pub fn shape_records(records: Vec<FlatRecord>) -> ShapedRows {
    let max_depth = records.iter().map(FlatRecord::depth).max().unwrap_or(0);

    let mut headers: Vec<String> = (1..=max_depth)
        .map(|level| format!("Folder Level {}", level))
        .collect();
    headers.extend(FIXED_HEADERS.iter().map(|h| h.to_string()));

    let rows = records
        .into_iter()
        .map(|record| {
            let mut cells = Vec::with_capacity(max_depth + FIXED_HEADERS.len());
            cells.extend(record.folders);
            cells.resize(max_depth, String::new());
            cells.push(record.name);
            cells.push(record.method);
            cells.push(record.url);
            cells
        })
        .collect();

    ShapedRows { headers, rows }
}
