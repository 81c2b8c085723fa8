use clap::Parser;
use std::path::{Path, PathBuf};

use anyhow::Result;

use postman2xlsx::cli::{Args, CliConfig, CliUtils};
use postman2xlsx::export::batch::export_file;
use postman2xlsx::export::{export_collection, ExportData, ExportStatistics, OutputFormat};
use postman2xlsx::parser::directory::find_json_files;
use postman2xlsx::parser::CollectionSource;
use postman2xlsx::writer;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CliConfig::from_args(args)?;

    if config.is_verbose() {
        eprintln!("Verbose mode enabled");
        eprintln!("Input: {}", config.input_description());
        eprintln!("Output: {}", config.output_description());
    }

    if config.args.stdin {
        export_source(CollectionSource::Stdin, &config)
    } else if let Some(input) = config.args.input.clone() {
        let path = PathBuf::from(&input);

        // Check if input looks like JSON string (starts with { or [)
        let trimmed = input.trim();
        if (trimmed.starts_with('{') && trimmed.ends_with('}'))
            || (trimmed.starts_with('[') && trimmed.ends_with(']'))
        {
            export_source(CollectionSource::String(input), &config)
        } else if path.is_file() {
            export_source(CollectionSource::File(path), &config)
        } else if path.is_dir() {
            export_directory(&path, &config)
        } else {
            Err(anyhow::anyhow!("Input path does not exist: {}", input))
        }
    } else {
        Err(anyhow::anyhow!(
            "No input provided. Use --stdin or provide an input path"
        ))
    }
}

fn export_source(source: CollectionSource, config: &CliConfig) -> Result<()> {
    // Keep stdout clean when the spreadsheet itself goes there
    let to_stdout = config.args.output.is_none();

    if !config.is_quiet() && !to_stdout {
        println!("Selected input: {}", source.description());
    }

    let document = source
        .parse()
        .map_err(|e| anyhow::anyhow!("Error reading JSON: {}", e))?;

    let data = export_collection(&document, &config.export_config)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    // A collection with zero requests is a valid-but-empty outcome
    if data.is_empty() {
        CliUtils::show_warning("No requests found in the collection", config.is_quiet());
        return Ok(());
    }

    CliUtils::show_preview(
        &data.shaped,
        config.export_config.preview_rows,
        config.is_quiet() || to_stdout,
    );

    write_output(&data, config)?;

    if config.want_stats() && !to_stdout {
        output_statistics(&data.stats, config.is_quiet());
    }

    Ok(())
}

fn write_output(data: &ExportData, config: &CliConfig) -> Result<()> {
    match &config.args.output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            writer::write_spreadsheet(&data.shaped, output_path, &config.export_config)
                .map_err(|e| anyhow::anyhow!("Failed to save spreadsheet: {}", e))?;

            CliUtils::show_success(
                &format!(
                    "Exported {} requests to: {}",
                    data.row_count(),
                    output_path.display()
                ),
                config.is_quiet(),
            );
            Ok(())
        }
        None => match config.export_config.format {
            OutputFormat::Csv => {
                writer::csv::write_csv_to(&data.shaped, std::io::stdout())
                    .map_err(|e| anyhow::anyhow!("Failed to write CSV: {}", e))
            }
            OutputFormat::Xlsx => Err(anyhow::anyhow!(
                "Output file required for xlsx format. Use --output or --format csv"
            )),
        },
    }
}

fn export_directory(input_dir: &Path, config: &CliConfig) -> Result<()> {
    let output_dir = config
        .args
        .output
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Output directory required for directory export"))?;

    std::fs::create_dir_all(output_dir)?;

    let json_files = find_json_files(&input_dir.to_path_buf(), config.args.recursive)
        .map_err(|e| anyhow::anyhow!("Failed finding JSON files: {}", e))?;

    if json_files.is_empty() {
        if !config.is_quiet() {
            println!("No JSON files found in {}", input_dir.display());
        }
        return Ok(());
    }

    if !config.is_quiet() {
        println!("Found {} JSON files", json_files.len());
    }

    let progress = if config.is_quiet() || json_files.len() < 2 {
        None
    } else {
        Some(CliUtils::create_progress_bar(json_files.len() as u64))
    };

    let mut totals = ExportStatistics::new();
    for json_file in &json_files {
        let relative_path = json_file.strip_prefix(input_dir).unwrap_or(json_file);

        match export_file(json_file, output_dir, &config.export_config) {
            Ok((entry, stats)) => {
                totals.merge(&stats);
                let message = format!(
                    "✓ {} -> {} ({} requests)",
                    relative_path.display(),
                    entry.output.display(),
                    entry.request_count
                );
                match &progress {
                    Some(pb) => pb.println(message),
                    None => {
                        if !config.is_quiet() {
                            println!("{}", message);
                        }
                    }
                }
            }
            Err(e) => {
                let message = format!(
                    "✗ Error exporting {}: {}",
                    relative_path.display(),
                    e.user_message()
                );
                match &progress {
                    Some(pb) => pb.println(&message),
                    None => eprintln!("{}", message),
                }
                if !config.continue_on_error() {
                    if let Some(pb) = &progress {
                        pb.finish_and_clear();
                    }
                    return Err(anyhow::anyhow!("Aborting due to export error: {}", e));
                }
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if config.want_stats() {
        output_statistics(&totals, config.is_quiet());
    }

    Ok(())
}

fn output_statistics(stats: &ExportStatistics, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nExport Statistics:");
    println!("Files processed: {}", stats.file_count);
    println!("Requests exported: {}", stats.request_count);
    println!("Max folder depth: {}", stats.max_folder_depth);
    println!(
        "Input size: {}",
        CliUtils::format_file_size(stats.input_size_bytes)
    );
    println!("Processing time: {}ms", stats.processing_time_ms);
}
