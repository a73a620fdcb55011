//! Worksheet segmentation: peels off the global header region and splits the
//! remaining body into tables at fully empty rows.
use super::classify::is_empty_row;
use super::value::row_text;
use crate::spreadsheet::Worksheet;
use calamine::Data;

/// Number of leading worksheet rows reserved for the global header.
pub const GLOBAL_HEADER_ROWS: usize = 2;

/// One table: a contiguous maximal run of non-empty body rows.
/// Each row is tagged with its 1-based physical row number.
#[derive(Clone, Debug)]
pub struct Table<'a> {
    pub rows: Vec<(usize, &'a [Data])>,
}

/// Worksheet-level descriptive context, taken unconditionally from the first
/// two physical rows. Each row contributes its non-absent cell text joined
/// with `" | "` and is kept only when non-empty.
pub fn global_header(worksheet: &Worksheet) -> Vec<String> {
    worksheet
        .rows
        .iter()
        .take(GLOBAL_HEADER_ROWS)
        .filter_map(|row| row_text(row))
        .collect()
}

/// Splits the worksheet body into tables.
///
/// Rows 0 and 1 belong to the global header and are excluded. The remaining
/// rows are walked in order: an empty row closes the current table and is
/// itself discarded, so consecutive empty rows collapse into one boundary and
/// leading or trailing empties produce no empty table.
pub fn segment(worksheet: &Worksheet) -> Vec<Table<'_>> {
    let mut tables = Vec::new();
    let mut current: Vec<(usize, &[Data])> = Vec::new();
    for (index, row) in worksheet.rows.iter().enumerate().skip(GLOBAL_HEADER_ROWS) {
        if is_empty_row(row) {
            if !current.is_empty() {
                tables.push(Table {
                    rows: std::mem::take(&mut current),
                });
            }
            continue;
        }
        current.push((index + 1, row.as_slice()));
    }
    if !current.is_empty() {
        tables.push(Table { rows: current });
    }
    tables
}
