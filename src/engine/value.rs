use calamine::{Data, ExcelDateTime};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Separator used when joining cell fragments into header and label text.
pub const SEPARATOR: &str = " | ";

/// A normalized scalar cell value.
///
/// Every raw workbook cell collapses to one of these canonical kinds via
/// [`normalize`]. `DateTime` always carries an ISO-8601 string; booleans and
/// error text are the pass-through arm for values outside the four canonical
/// kinds. Serializes untagged, so JSON output reads as plain scalars.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent cell: missing, empty string, or whitespace-only text
    Empty,
    /// Text content, kept verbatim
    Text(String),
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Date, time or datetime as an ISO-8601 string
    DateTime(String),
    /// Boolean, passed through unchanged
    Bool(bool),
}

impl Value {
    /// Returns true for the absent kind.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

/// Canonicalizes one raw cell value.
///
/// Total: every input shape maps to some [`Value`], nothing fails. Rules in
/// priority order: absent or blank text becomes `Empty`; serial and ISO
/// date/time values become ISO-8601 `DateTime` strings; numbers stay numbers;
/// anything else passes through (booleans as booleans, error cells and ISO
/// durations as their text form).
pub fn normalize(value: &Data) -> Value {
    match value {
        Data::Empty => Value::Empty,
        Data::String(text) if text.trim().is_empty() => Value::Empty,
        Data::String(text) => Value::Text(text.to_owned()),
        Data::Int(number) => Value::Int(*number),
        Data::Float(number) => Value::Float(*number),
        Data::DateTime(serial) if serial.is_duration() => Value::Text(duration_text(serial)),
        Data::DateTime(serial) => Value::DateTime(serial_to_iso(serial)),
        Data::DateTimeIso(text) => Value::DateTime(text.to_owned()),
        Data::DurationIso(text) => Value::Text(text.to_owned()),
        Data::Bool(flag) => Value::Bool(*flag),
        Data::Error(error) => Value::Text(error.to_string()),
    }
}

/// Renders an Excel serial date/time as an ISO-8601 string.
///
/// A serial with no fractional part carries no time of day and renders as a
/// date; a serial below 1.0 carries no date and renders as a time.
fn serial_to_iso(serial: &ExcelDateTime) -> String {
    match serial.as_datetime() {
        Some(datetime) => format_datetime(datetime, serial.as_f64()),
        // Out-of-range serials keep their numeric representation
        None => serial.as_f64().to_string(),
    }
}

/// Serials with no fractional part render as dates, sub-day serials as times
/// of day, everything else as a full datetime.
fn format_datetime(datetime: NaiveDateTime, serial: f64) -> String {
    if serial.fract() == 0.0 {
        datetime.format("%Y-%m-%d").to_string()
    } else if serial < 1.0 {
        datetime.format("%H:%M:%S").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Renders an elapsed-time serial as `HH:MM:SS`, hours unclamped.
fn duration_text(serial: &ExcelDateTime) -> String {
    match serial.as_duration() {
        Some(duration) => {
            let mut seconds = duration.num_seconds();
            let sign = if seconds < 0 { "-" } else { "" };
            seconds = seconds.abs();
            format!(
                "{sign}{:02}:{:02}:{:02}",
                seconds / 3600,
                seconds % 3600 / 60,
                seconds % 60
            )
        }
        None => serial.as_f64().to_string(),
    }
}

/// Trimmed display text of a raw cell, `None` when the cell is absent.
pub fn cell_text(value: &Data) -> Option<String> {
    match normalize(value) {
        Value::Empty => None,
        Value::Text(text) => Some(text.trim().to_owned()),
        Value::Int(number) => Some(number.to_string()),
        Value::Float(number) => Some(number.to_string()),
        Value::DateTime(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
    }
}

/// Joins the non-absent cells of a row into one text fragment.
/// Returns `None` when no cell contributes anything.
pub fn row_text(row: &[Data]) -> Option<String> {
    let parts: Vec<String> = row.iter().filter_map(cell_text).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, ExcelDateTimeType};

    #[test]
    fn blank_text_normalizes_to_empty() {
        assert_eq!(normalize(&Data::Empty), Value::Empty);
        assert_eq!(normalize(&Data::String("".to_owned())), Value::Empty);
        assert_eq!(normalize(&Data::String("   ".to_owned())), Value::Empty);
    }

    #[test]
    fn numbers_stay_numbers() {
        assert_eq!(normalize(&Data::Int(42)), Value::Int(42));
        assert_eq!(normalize(&Data::Float(123.45)), Value::Float(123.45));
    }

    #[test]
    fn serial_date_renders_as_iso_date() {
        // 2024-01-01 in the 1900 epoch
        let serial = ExcelDateTime::new(45292.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            normalize(&Data::DateTime(serial)),
            Value::DateTime("2024-01-01".to_owned())
        );
    }

    #[test]
    fn serial_with_time_renders_full_datetime() {
        let serial = ExcelDateTime::new(45292.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            normalize(&Data::DateTime(serial)),
            Value::DateTime("2024-01-01T12:00:00".to_owned())
        );
    }

    #[test]
    fn serial_below_one_renders_time_of_day() {
        let serial = ExcelDateTime::new(0.25, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            normalize(&Data::DateTime(serial)),
            Value::DateTime("06:00:00".to_owned())
        );
    }

    #[test]
    fn duration_serial_stays_text() {
        // 1.5 days of elapsed time
        let serial = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);
        assert_eq!(
            normalize(&Data::DateTime(serial)),
            Value::Text("36:00:00".to_owned())
        );
    }

    #[test]
    fn unrecognized_kinds_pass_through() {
        assert_eq!(normalize(&Data::Bool(true)), Value::Bool(true));
        assert_eq!(
            normalize(&Data::Error(CellErrorType::Div0)),
            Value::Text(CellErrorType::Div0.to_string())
        );
    }

    #[test]
    fn normalization_is_idempotent_over_normalized_text() {
        // A cell already holding an ISO string stays byte-identical
        let iso = Data::String("2024-01-01".to_owned());
        assert_eq!(normalize(&iso), normalize(&iso));
        assert_eq!(normalize(&iso), Value::Text("2024-01-01".to_owned()));
    }

    #[test]
    fn row_text_skips_absent_cells() {
        let row = vec![
            Data::String("Fact Sheet".to_owned()),
            Data::Empty,
            Data::String(" ".to_owned()),
            Data::String("2024".to_owned()),
        ];
        assert_eq!(row_text(&row), Some("Fact Sheet | 2024".to_owned()));
        assert_eq!(row_text(&[Data::Empty, Data::Empty]), None);
    }
}
