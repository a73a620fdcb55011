//! Pure row-shape predicates.
//!
//! Structure is inferred from untyped grids with no declared schema, so the
//! classifier is a set of independent rule functions rather than one decision
//! tree; each predicate can be tested and tuned in isolation.
use crate::config::EngineConfig;
use calamine::Data;

/// True when the raw cell holds nothing: absent, or text that trims to nothing.
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// True for integer and floating cells.
/// Dates, booleans and error cells do not count as numeric.
pub fn is_numeric(cell: &Data) -> bool {
    matches!(cell, Data::Int(_) | Data::Float(_))
}

/// Number of numeric cells in the row.
pub fn count_numeric(row: &[Data]) -> usize {
    row.iter().filter(|cell| is_numeric(cell)).count()
}

/// True iff every cell in the row is blank.
pub fn is_empty_row(row: &[Data]) -> bool {
    row.iter().all(is_blank)
}

/// Descriptive label rows ("fund rows"): the leading cell is long text
/// containing no digits. Such rows name a fund or section and must never be
/// mistaken for tabular data, even when later cells happen to be numeric.
pub fn looks_like_label_row(row: &[Data], config: &EngineConfig) -> bool {
    match row.first() {
        Some(Data::String(first)) => {
            first.chars().count() > config.label_min_chars
                && !first.chars().any(|character| character.is_ascii_digit())
        }
        _ => false,
    }
}

/// Data rows carry at least one numeric cell and are not label rows.
/// The label check takes precedence regardless of numeric content elsewhere.
pub fn is_data_row(row: &[Data], config: &EngineConfig) -> bool {
    count_numeric(row) >= 1 && !looks_like_label_row(row, config)
}

/// Column header rows: at least two non-blank cells, zero numeric cells, and
/// the non-blank cell indices contiguous up to the configured gap tolerance.
///
/// Mutually exclusive with [`is_data_row`] by construction: header rows have
/// no numeric cell, data rows need at least one.
pub fn is_column_header_row(row: &[Data], config: &EngineConfig) -> bool {
    let indexes: Vec<usize> = row
        .iter()
        .enumerate()
        .filter(|(_, cell)| !is_blank(cell))
        .map(|(index, _)| index)
        .collect();
    if indexes.len() < 2 {
        return false;
    }
    if indexes.iter().any(|&index| is_numeric(&row[index])) {
        return false;
    }
    let lower = indexes[0];
    let upper = indexes[indexes.len() - 1];
    upper - lower <= indexes.len() + config.header_gap_tolerance
}
