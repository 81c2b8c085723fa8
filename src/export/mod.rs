//! Collection export module
//!
//! This module contains the core flattening logic, configuration, shaping and
//! statistics for turning a collection tree into spreadsheet rows.

pub mod batch;
pub mod config;
pub mod engine;
pub mod flatten;
pub mod shape;
pub mod stats;

pub use config::{ExportConfig, OutputFormat};
pub use engine::{export_collection, ExportData, ExportEngine};
pub use flatten::{flatten_collection, normalize_name, resolve_url, FlatRecord};
pub use shape::{shape_records, ShapedRows};
pub use stats::ExportStatistics;

use crate::error::ExportError;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
