// src/process/mod.rs

pub mod combine;
pub mod decode;
pub mod dedup;
pub mod filter;
pub mod project;
pub mod rename;
pub mod table;
pub mod write;

pub use combine::{combine, Accumulator};
pub use table::{Table, Value};

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::{config::Config, error::PipelineError, source::discover_csv_files};

/// Per-run counters, logged when the run ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_combined: usize,
    pub files_undecodable: usize,
    pub files_without_targets: usize,
    pub rows_combined: usize,
    pub rows_dropped_normal: usize,
    pub rows_dropped_unreported: usize,
    pub rows_dropped_duplicate: usize,
    pub rows_written: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, summary: RunSummary },
    /// Every file was skipped, or there were none; nothing was written.
    NoFilesProcessed(RunSummary),
}

/// Combine every CSV under `config.input_dir` into `config.output_file`.
///
/// Files that cannot be decoded or share no target columns are skipped. When
/// no file carries the impairment column it is filled with nulls. Only a bad
/// input directory, a combined table without a key column, or a failed write
/// end the run with an error.
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input_dir.display()))]
pub fn run(config: &Config) -> Result<Outcome, PipelineError> {
    config.validate()?;

    // 1) Decode + project every file, collecting survivors in order
    let mut summary = RunSummary::default();
    let acc = accumulate(config, &mut summary)?;

    // 2) Stack them on the union of their columns
    let Some(mut table) = combine(acc.into_tables(), &config.target_columns) else {
        info!(files_found = summary.files_found, "no files were processed");
        return Ok(Outcome::NoFilesProcessed(summary));
    };
    summary.rows_combined = table.len();
    info!(
        files = summary.files_combined,
        rows = table.len(),
        columns = table.headers.len(),
        "combined tables"
    );

    // 3) Order by impairment code and drop normal/unreported rows
    if combine::ensure_column(&mut table, &config.impairment_column, &config.target_columns) {
        warn!(
            column = %config.impairment_column,
            "no file carries the impairment column, treating every code as missing"
        );
    }
    let stats = filter::filter_impairment(&mut table, &config.impairment_column)?;
    summary.rows_dropped_normal = stats.dropped_normal;
    summary.rows_dropped_unreported = stats.dropped_unreported;

    // 4) One row per crash; the sort above decides which one survives
    summary.rows_dropped_duplicate = dedup::dedup_first(&mut table, &config.key_columns)?;
    debug!(
        rows = table.len(),
        dropped = summary.rows_dropped_duplicate,
        "deduplicated"
    );

    // 5) Display names, then write
    rename::rename_columns(&mut table, &config.column_names);
    if let Err(e) = write::write_csv(&table, &config.output_file) {
        error!(error = %e, "failed to save the combined CSV file");
        return Err(e);
    }
    summary.rows_written = table.len();
    info!(
        path = %config.output_file.display(),
        ?summary,
        "combined and saved all files"
    );

    Ok(Outcome::Written {
        path: config.output_file.clone(),
        summary,
    })
}

/// Decode and project each discovered file, skipping the ones that fail.
fn accumulate(config: &Config, summary: &mut RunSummary) -> Result<Accumulator, PipelineError> {
    let mut acc = Accumulator::default();

    for path in discover_csv_files(&config.input_dir)? {
        summary.files_found += 1;
        let name = file_label(&path);
        info!(file = %name, "processing file");

        // 1) Decode, falling through the configured encodings
        let table = match decode::decode_file(&path, &config.encodings) {
            Ok(t) => t,
            Err(e) => {
                error!(file = %name, error = %e, "failed to read file, skipping");
                summary.files_undecodable += 1;
                continue;
            }
        };

        // 2) Keep only target columns; no overlap means nothing to add
        match project::project(table, &config.target_columns) {
            Ok(projected) => {
                debug!(
                    file = %name,
                    columns = projected.headers.len(),
                    rows = projected.len(),
                    "projected"
                );
                acc.push(path, projected);
            }
            Err(e) => {
                warn!(file = %name, "{}, skipping file", e);
                summary.files_without_targets += 1;
            }
        }
    }

    summary.files_combined = acc.len();
    let sources: Vec<String> = acc.sources().map(file_label).collect();
    debug!(rows = acc.total_rows(), ?sources, "accumulated");
    Ok(acc)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
