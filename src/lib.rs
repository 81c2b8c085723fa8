//! Postman collection to spreadsheet exporter
//!
//! A Rust CLI tool for flattening a Postman collection (a nested JSON tree of
//! folders and requests) into one spreadsheet row per request, with the folder
//! hierarchy expanded into separate columns.

pub mod cli;
pub mod error;
pub mod export;
pub mod parser;
pub mod writer;

// Re-export commonly used types
pub use error::{ExportError, ExportErrorKind, ParseError, WriteError};
pub use export::{
    export_collection, flatten_collection, normalize_name, resolve_url, shape_records,
    ExportConfig, ExportData, ExportStatistics, FlatRecord, OutputFormat, ShapedRows,
};
pub use parser::{decode_collection, CollectionNode, CollectionSource, UrlField};

/// Export a collection document with default configuration
pub fn export_document(
    document: &serde_json::Value,
) -> Result<ExportData, ExportError> {
    let config = ExportConfig::default();
    export_collection(document, &config)
}
