//! Batch driver: walks a directory of spreadsheet files, runs the extraction
//! engine over every worksheet and writes one JSON document per chunk.
//!
//! Each source file is processed inside its own failure boundary: an
//! unreadable workbook is logged and skipped, it never aborts the run.
use crate::config::BatchConfig;
use crate::engine::{self, Chunk};
use crate::error::SheetgrainError;
use crate::spreadsheet::{Spreadsheet, SUPPORTED_EXTENSIONS};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of one batch run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    /// Source files processed to completion
    pub files_processed: usize,
    /// Source files skipped because they could not be read
    pub files_failed: usize,
    /// Chunk records written across all files
    pub chunks_written: usize,
}

/// Processes every spreadsheet file under the configured input directory.
///
/// # Errors
///
/// Fails only on setup problems (output directory creation, input
/// enumeration); per-file read failures are contained and counted in the
/// summary instead.
pub fn run(config: &BatchConfig) -> Result<BatchSummary, SheetgrainError> {
    fs::create_dir_all(&config.output_dir)?;
    let mut summary = BatchSummary::default();
    for path in discover_files(&config.input_dir)? {
        match process_file(&path, config) {
            Ok(written) => {
                summary.files_processed += 1;
                summary.chunks_written += written;
                info!(file = %path.display(), chunks = written, "processed workbook");
            }
            Err(error) => {
                summary.files_failed += 1;
                warn!(file = %path.display(), %error, "skipping unreadable workbook");
            }
        }
    }
    Ok(summary)
}

/// Spreadsheet files directly under the input directory, in sorted order so
/// repeated runs visit files deterministically. The directory is listed
/// rather than globbed, so input paths may contain any characters.
pub fn discover_files(input_dir: &Path) -> Result<Vec<PathBuf>, SheetgrainError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let supported = path
            .extension()
            .and_then(OsStr::to_str)
            .map(|extension| SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if supported && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Processes one workbook and returns the number of chunks written.
fn process_file(path: &Path, config: &BatchConfig) -> Result<usize, SheetgrainError> {
    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("workbook");
    let mut spreadsheet = Spreadsheet::open(path)?;
    let out_dir = config.output_dir.join(stem);
    let mut written = 0;
    for sheet_name in spreadsheet.sheet_names() {
        if !config.accepts_sheet(&sheet_name) {
            debug!(sheet = %sheet_name, "sheet filtered out");
            continue;
        }
        let worksheet = spreadsheet.worksheet(&sheet_name)?;
        let chunks = engine::process_worksheet(&worksheet, stem, &config.engine);
        if chunks.is_empty() {
            debug!(sheet = %sheet_name, "no chunks extracted");
            continue;
        }
        written += write_chunks(&chunks, &out_dir)?;
    }
    Ok(written)
}

/// Writes each chunk as a pretty JSON document named `{sheet}_row_{n}.json`.
///
/// The directory is created on the first chunk, so a chunk-less workbook
/// leaves no artifact behind. Writes are keyed by chunk identity, which makes
/// re-processing idempotent: the same input overwrites the same files.
pub fn write_chunks(chunks: &[Chunk], out_dir: &Path) -> Result<usize, SheetgrainError> {
    if chunks.is_empty() {
        return Ok(0);
    }
    fs::create_dir_all(out_dir)?;
    for chunk in chunks {
        let file_name = format!("{}.json", sanitize_file_stem(&chunk.key()));
        fs::write(out_dir.join(file_name), serde_json::to_vec_pretty(chunk)?)?;
    }
    Ok(chunks.len())
}

/// Replaces path-hostile characters in sheet-derived file stems.
fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|character| match character {
            '/' | '\\' | ':' => '_',
            _ => character,
        })
        .collect()
}
