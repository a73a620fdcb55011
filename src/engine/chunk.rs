//! Chunk records and the per-table chunk builder.
use super::classify::is_data_row;
use super::headers::{header_row_indexes, merge_column_headers, subheaders};
use super::segment::Table;
use super::value::{normalize, Value};
use crate::config::EngineConfig;
use calamine::Data;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Insertion-ordered column → value mapping.
///
/// Keys are unique; inserting an existing key overwrites its value but keeps
/// the original position, so serialized field order always mirrors column
/// order in the source sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataMap {
    entries: Vec<(String, Value)>,
}

impl DataMap {
    pub fn insert(&mut self, key: String, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.entries.iter()
    }
}

impl Serialize for DataMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One emitted record: a single data row plus its header context.
///
/// `row_number` is the 1-based physical row position in the source sheet.
/// Identity is the (source_file, sheet_name, row_number) triple; `data` is
/// never empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chunk {
    pub source_file: String,
    pub sheet_name: String,
    pub row_number: usize,
    pub global_header: Vec<String>,
    pub subheaders: Vec<String>,
    pub data: DataMap,
}

impl Chunk {
    /// Addressable key for this record, used as its output file stem.
    pub fn key(&self) -> String {
        format!("{}_row_{}", self.sheet_name, self.row_number)
    }
}

/// Emits the chunks of one table.
///
/// Header rows are located anywhere in the table; a table without one
/// contributes nothing. Rows after the first header row that classify as
/// data rows are mapped column-by-column over the merged names, and a row
/// whose mapping comes out empty is dropped rather than emitted as garbage.
/// Never fails: rows that fit no productive pattern are silently skipped.
pub fn chunks_from_table(
    table: &Table<'_>,
    source_file: &str,
    sheet_name: &str,
    global_header: &[String],
    config: &EngineConfig,
) -> Vec<Chunk> {
    let header_indexes = header_row_indexes(table, config);
    let Some(&first_header_index) = header_indexes.first() else {
        return Vec::new();
    };
    let header_rows: Vec<&[Data]> = header_indexes
        .iter()
        .map(|&index| table.rows[index].1)
        .collect();
    let columns = merge_column_headers(&header_rows);
    let subheaders = subheaders(table, first_header_index, config);

    let mut chunks = Vec::new();
    for &(row_number, row) in &table.rows[first_header_index + 1..] {
        if !is_data_row(row, config) {
            continue;
        }
        let mut data = DataMap::default();
        for (index, cell) in row.iter().enumerate() {
            if let Some(Some(name)) = columns.get(index) {
                let value = normalize(cell);
                if !value.is_empty() {
                    data.insert(name.to_owned(), value);
                }
            }
        }
        if data.is_empty() {
            continue;
        }
        chunks.push(Chunk {
            source_file: source_file.to_owned(),
            sheet_name: sheet_name.to_owned(),
            row_number,
            global_header: global_header.to_vec(),
            subheaders: subheaders.clone(),
            data,
        });
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Data {
        Data::String(value.to_owned())
    }

    fn build(rows: &[Vec<Data>]) -> Vec<Chunk> {
        let table = Table {
            rows: rows
                .iter()
                .enumerate()
                .map(|(index, row)| (index + 3, row.as_slice()))
                .collect(),
        };
        chunks_from_table(&table, "book", "Sheet1", &[], &EngineConfig::default())
    }

    #[test]
    fn data_map_keeps_column_order_and_overwrites_in_place() {
        let mut map = DataMap::default();
        map.insert("b".to_owned(), Value::Int(1));
        map.insert("a".to_owned(), Value::Int(2));
        map.insert("b".to_owned(), Value::Int(3));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), Some(&Value::Int(3)));
        let keys: Vec<&str> = map.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":3,"a":2}"#);
    }

    #[test]
    fn table_without_header_emits_nothing() {
        let chunks = build(&[
            vec![text("a"), Data::Float(1.0)],
            vec![text("b"), Data::Float(2.0)],
        ]);
        assert!(chunks.is_empty());
    }

    #[test]
    fn rows_mapping_to_nothing_are_dropped() {
        // Header covers columns 0..2; the data row is numeric only at column 3
        let chunks = build(&[
            vec![text("Name"), text("NAV")],
            vec![Data::Empty, Data::Empty, Data::Empty, Data::Float(9.0)],
        ]);
        assert!(chunks.is_empty());
    }

    #[test]
    fn every_emitted_chunk_has_data() {
        let chunks = build(&[
            vec![text("Name"), text("NAV")],
            vec![text("ABC Fund"), Data::Float(123.45)],
            vec![Data::Empty, Data::Empty, Data::Float(7.0)],
        ]);
        assert_eq!(chunks.len(), 1);
        assert!(chunks.iter().all(|chunk| !chunk.data.is_empty()));
        assert_eq!(chunks[0].key(), "Sheet1_row_4");
    }

    #[test]
    fn duplicate_merged_names_collapse_to_last_value() {
        let chunks = build(&[
            vec![text("NAV"), text("NAV")],
            vec![Data::Float(1.0), Data::Float(2.0)],
        ]);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].data.len(), 1);
        assert_eq!(chunks[0].data.get("NAV"), Some(&Value::Float(2.0)));
    }
}
