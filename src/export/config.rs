//! Configuration options for collection export

/// Default worksheet title, matching the original export layout
pub const DEFAULT_SHEET_NAME: &str = "Postman URLs";

/// Default number of extracted rows shown in the console preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Excel worksheet names are capped at 31 characters
const MAX_SHEET_NAME_LEN: usize = 31;

/// Output spreadsheet format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// Excel workbook (.xlsx)
    Xlsx,
    /// Comma-separated values (.csv)
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Invalid format '{}'. Use 'xlsx' or 'csv'", other)),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Xlsx
    }
}

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output spreadsheet format
    pub format: OutputFormat,
    /// Worksheet title (xlsx only)
    pub sheet_name: String,
    /// Number of rows to show in the console preview
    pub preview_rows: usize,
    /// Recurse into subdirectories in batch mode
    pub recursive: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            recursive: false,
        }
    }
}

impl ExportConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.sheet_name.is_empty() {
            return Err("Sheet name must not be empty".to_string());
        }
        if self.sheet_name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(format!(
                "Sheet name too long: {} characters (limit: {})",
                self.sheet_name.chars().count(),
                MAX_SHEET_NAME_LEN
            ));
        }
        // Characters Excel rejects in worksheet names
        if self.sheet_name.contains(['[', ']', ':', '*', '?', '/', '\\']) {
            return Err(format!(
                "Sheet name '{}' contains invalid characters",
                self.sheet_name
            ));
        }
        Ok(())
    }
}
