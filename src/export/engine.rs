//! Core export engine: decode, flatten and shape a collection document

use crate::error::{ExportError, ExportErrorKind};
use crate::export::config::ExportConfig;
use crate::export::flatten::{flatten_collection, FlatRecord};
use crate::export::shape::{shape_records, ShapedRows};
use crate::export::stats::ExportStatistics;
use crate::export::ExportResult;
use crate::parser::decode_collection;
use serde_json::Value;
use std::time::Instant;

/// Result of exporting one collection document
#[derive(Debug, Clone)]
pub struct ExportData {
    pub shaped: ShapedRows,
    pub stats: ExportStatistics,
}

impl ExportData {
    /// Check if the collection contained any requests
    pub fn is_empty(&self) -> bool {
        self.shaped.rows.is_empty()
    }

    /// Number of exported request rows
    pub fn row_count(&self) -> usize {
        self.shaped.row_count()
    }
}

/// Export engine bound to one configuration
pub struct ExportEngine {
    config: ExportConfig,
}

impl ExportEngine {
    /// Create a new export engine
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Flatten and shape a decoded collection document.
    ///
    /// A document with zero requests produces an empty (but valid) result;
    /// deciding whether that is worth reporting is left to the caller.
    pub fn export(&self, document: &Value) -> ExportResult<ExportData> {
        let started = Instant::now();

        self.config.validate().map_err(|message| {
            ExportError::export(ExportErrorKind::configuration(message))
        })?;

        let input_size = document.to_string().len() as u64;
        let nodes = decode_collection(document);
        let records = flatten_collection(&nodes);
        let max_depth = records.iter().map(FlatRecord::depth).max().unwrap_or(0);
        let shaped = shape_records(records);

        let stats = ExportStatistics::for_export(
            input_size,
            shaped.row_count(),
            max_depth,
            shaped.column_count(),
            started.elapsed(),
        );

        Ok(ExportData { shaped, stats })
    }
}

/// Export a collection document with the given configuration
pub fn export_collection(document: &Value, config: &ExportConfig) -> ExportResult<ExportData> {
    ExportEngine::new(config.clone()).export(document)
}
