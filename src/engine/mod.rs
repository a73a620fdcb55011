//! # Structured-Chunk Extraction Engine
//!
//! Turns one worksheet's raw grid into self-describing chunk records.
//! Pipeline: the segmenter peels off the two-row global header and splits
//! the body into tables at empty rows; per table, the header rows are
//! located and merged into column names, subheader context is scanned, and
//! each qualifying data row becomes one [`Chunk`] with normalized values.
//!
//! The whole pipeline is pure and total: it reads only the worksheet it is
//! given, shares no state, and never fails. Malformed rows are skipped, not
//! reported. Worksheets may therefore be processed concurrently without
//! coordination.
pub mod chunk;
pub mod classify;
pub mod headers;
pub mod segment;
pub mod value;

pub use chunk::{Chunk, DataMap};
pub use value::Value;

use crate::config::EngineConfig;
use crate::spreadsheet::Worksheet;

/// Runs the full extraction pipeline over one worksheet.
///
/// `source_file` becomes part of every chunk's identity triple. A worksheet
/// that yields no chunks simply returns an empty vector.
pub fn process_worksheet(
    worksheet: &Worksheet,
    source_file: &str,
    config: &EngineConfig,
) -> Vec<Chunk> {
    let global_header = segment::global_header(worksheet);
    segment::segment(worksheet)
        .iter()
        .flat_map(|table| {
            chunk::chunks_from_table(table, source_file, &worksheet.name, &global_header, config)
        })
        .collect()
}
