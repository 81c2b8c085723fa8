//! Batch export of a directory of collection files

use crate::export::engine::ExportEngine;
use crate::export::stats::ExportStatistics;
use crate::export::{ExportConfig, ExportResult};
use crate::parser::CollectionSource;
use crate::writer;
use std::path::{Path, PathBuf};

/// Outcome of one file in a batch run
#[derive(Debug)]
pub struct BatchEntry {
    pub input: PathBuf,
    pub output: PathBuf,
    pub request_count: usize,
}

/// Export every given collection file into the output directory.
///
/// Each input `foo.json` becomes `foo.xlsx` (or `.csv`) in `output_dir`.
/// With `continue_on_error`, a failing file is reported and skipped instead
/// of aborting the batch.
pub fn export_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    config: &ExportConfig,
    continue_on_error: bool,
) -> ExportResult<(Vec<BatchEntry>, ExportStatistics)> {
    let engine = ExportEngine::new(config.clone());
    let mut entries = Vec::new();
    let mut totals = ExportStatistics::new();

    std::fs::create_dir_all(output_dir).map_err(|e| {
        crate::error::ExportError::export(crate::error::ExportErrorKind::io(
            e.to_string(),
            Some(output_dir.to_path_buf()),
        ))
    })?;

    for input in inputs {
        match export_with_engine(&engine, input, output_dir, config) {
            Ok((entry, stats)) => {
                totals.merge(&stats);
                entries.push(entry);
            }
            Err(e) => {
                if continue_on_error {
                    eprintln!("✗ Error exporting {}: {}", input.display(), e.user_message());
                    continue;
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok((entries, totals))
}

/// Export a single collection file into the output directory
pub fn export_file(
    input: &Path,
    output_dir: &Path,
    config: &ExportConfig,
) -> ExportResult<(BatchEntry, ExportStatistics)> {
    let engine = ExportEngine::new(config.clone());
    export_with_engine(&engine, input, output_dir, config)
}

fn export_with_engine(
    engine: &ExportEngine,
    input: &Path,
    output_dir: &Path,
    config: &ExportConfig,
) -> ExportResult<(BatchEntry, ExportStatistics)> {
    let source = CollectionSource::File(input.to_path_buf());
    let document = source.parse()?;
    let data = engine.export(&document)?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("collection");
    let output = output_dir.join(format!("{}.{}", stem, config.format.extension()));

    writer::write_spreadsheet(&data.shaped, &output, config)?;

    let entry = BatchEntry {
        input: input.to_path_buf(),
        output,
        request_count: data.row_count(),
    };
    Ok((entry, data.stats))
}
