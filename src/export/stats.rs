//! Statistics tracking for export operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics for one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStatistics {
    /// Input JSON size in bytes
    pub input_size_bytes: u64,
    /// Number of requests extracted
    pub request_count: usize,
    /// Maximum folder depth observed
    pub max_folder_depth: usize,
    /// Number of output columns
    pub column_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ExportStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            request_count: 0,
            max_folder_depth: 0,
            column_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ExportStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single export
    pub fn for_export(
        input_size: u64,
        request_count: usize,
        max_folder_depth: usize,
        column_count: usize,
        processing_time: Duration,
    ) -> Self {
        Self {
            input_size_bytes: input_size,
            request_count,
            max_folder_depth,
            column_count,
            processing_time_ms: processing_time.as_millis() as u64,
            file_count: 1,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Merge statistics from another run (batch mode)
    pub fn merge(&mut self, other: &ExportStatistics) {
        self.input_size_bytes += other.input_size_bytes;
        self.request_count += other.request_count;
        self.max_folder_depth = self.max_folder_depth.max(other.max_folder_depth);
        self.column_count = self.column_count.max(other.column_count);
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;
        self.collected_at = chrono::Utc::now();
    }

    /// Format a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} requests, folder depth {}, {} columns, {} bytes in, {} ms",
            self.request_count,
            self.max_folder_depth,
            self.column_count,
            self.input_size_bytes,
            self.processing_time_ms
        )
    }
}
