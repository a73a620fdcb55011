//! Header assembly: locates header rows inside a table, merges them into one
//! column-name vector and derives the table's subheader context.
use super::classify::{count_numeric, is_column_header_row};
use super::segment::Table;
use super::value::{cell_text, row_text, SEPARATOR};
use crate::config::EngineConfig;
use calamine::Data;

/// Indices, within the table, of rows qualifying as column headers.
///
/// With `header_merge_max_gap` unset, every qualifying row participates no
/// matter how far apart. This permissive mode lets a group-label row and its
/// sub-label row combine across decorative noise. When the gap is set,
/// collection starts at the first header row and stops before the first one
/// farther than the gap from the previously accepted row, which keeps an
/// unrelated header-like row deep in the table from polluting the names.
pub fn header_row_indexes(table: &Table<'_>, config: &EngineConfig) -> Vec<usize> {
    let qualifying: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, (_, row))| is_column_header_row(row, config))
        .map(|(index, _)| index)
        .collect();
    match config.header_merge_max_gap {
        None => qualifying,
        Some(max_gap) => {
            let mut accepted: Vec<usize> = Vec::new();
            for index in qualifying {
                if let Some(&previous) = accepted.last() {
                    if index - previous > max_gap {
                        break;
                    }
                }
                accepted.push(index);
            }
            accepted
        }
    }
}

/// Merges header-candidate rows into one name per column index.
///
/// For each index the non-absent text of that index is collected from every
/// candidate row in order and joined with `" | "`. An index with no
/// contributions yields `None` and never receives an output field.
pub fn merge_column_headers(header_rows: &[&[Data]]) -> Vec<Option<String>> {
    let width = header_rows.iter().map(|row| row.len()).max().unwrap_or(0);
    (0..width)
        .map(|column| {
            let parts: Vec<String> = header_rows
                .iter()
                .filter_map(|row| row.get(column).and_then(cell_text))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(SEPARATOR))
            }
        })
        .collect()
}

/// Table-local context: up to `subheader_scan_rows` rows immediately above
/// the first header row, kept when their numeric content stays within
/// `subheader_max_numeric` and they render to non-empty text.
/// Order is preserved, earliest row first.
pub fn subheaders(table: &Table<'_>, first_header_index: usize, config: &EngineConfig) -> Vec<String> {
    let start = first_header_index.saturating_sub(config.subheader_scan_rows);
    table.rows[start..first_header_index]
        .iter()
        .filter(|(_, row)| count_numeric(row) <= config.subheader_max_numeric)
        .filter_map(|(_, row)| row_text(row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Data {
        Data::String(value.to_owned())
    }

    fn table(rows: Vec<Vec<Data>>) -> Table<'static> {
        let leaked: &'static Vec<Vec<Data>> = Box::leak(Box::new(rows));
        Table {
            rows: leaked
                .iter()
                .enumerate()
                .map(|(index, row)| (index + 3, row.as_slice()))
                .collect(),
        }
    }

    #[test]
    fn group_and_sub_labels_merge() {
        let group: &[Data] = &[text("Allocation"), Data::Empty, Data::Empty];
        let labels: &[Data] = &[text("Equity"), text("Debt"), text("Cash")];
        assert_eq!(
            merge_column_headers(&[group, labels]),
            vec![
                Some("Allocation | Equity".to_owned()),
                Some("Debt".to_owned()),
                Some("Cash".to_owned()),
            ]
        );
    }

    #[test]
    fn uncovered_column_yields_no_name() {
        let row: &[Data] = &[text("Name"), Data::Empty, text("NAV")];
        assert_eq!(
            merge_column_headers(&[row]),
            vec![Some("Name".to_owned()), None, Some("NAV".to_owned())]
        );
        assert!(merge_column_headers(&[]).is_empty());
    }

    #[test]
    fn header_indexes_unbounded_by_default() {
        let rows = table(vec![
            vec![text("Name"), text("NAV")],
            vec![text("fund"), Data::Float(1.0)],
            vec![text("Type"), text("Class")],
        ]);
        assert_eq!(header_row_indexes(&rows, &EngineConfig::default()), vec![0, 2]);
    }

    #[test]
    fn merge_gap_truncates_distant_headers() {
        let rows = table(vec![
            vec![text("Name"), text("NAV")],
            vec![text("fund"), Data::Float(1.0)],
            vec![text("fund"), Data::Float(2.0)],
            vec![text("fund"), Data::Float(3.0)],
            vec![text("Type"), text("Class")],
        ]);
        let config = EngineConfig {
            header_merge_max_gap: Some(2),
            ..EngineConfig::default()
        };
        assert_eq!(header_row_indexes(&rows, &config), vec![0]);
    }

    #[test]
    fn subheaders_respect_numeric_bound_and_lookback() {
        let rows = table(vec![
            vec![text("too far above to be scanned")],
            vec![text("Fund Overview"), Data::Float(1.0)],
            vec![Data::Float(1.0), Data::Float(2.0)],
            vec![text("Name"), text("NAV")],
        ]);
        // First header at index 3: scan rows 1 and 2; row 2 has two numerics
        assert_eq!(
            subheaders(&rows, 3, &EngineConfig::default()),
            vec!["Fund Overview | 1".to_owned()]
        );
        assert!(subheaders(&rows, 0, &EngineConfig::default()).is_empty());
    }
}
