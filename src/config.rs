use glob::Pattern;
use std::path::PathBuf;

/// Tunables for row classification and header assembly.
///
/// All thresholds are passed explicitly into the engine; there is no ambient
/// configuration state.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Minimum character count of the leading text cell for a row to qualify
    /// as a descriptive label row.
    pub label_min_chars: usize,

    /// Interior gaps tolerated by the header-row contiguity check:
    /// a row passes when `max_index - min_index <= non_empty_count + tolerance`.
    pub header_gap_tolerance: usize,

    /// Maximum distance, in table rows, between consecutive header rows that
    /// still merge into one column-name vector. `None` merges every header
    /// row found in the table regardless of distance.
    pub header_merge_max_gap: Option<usize>,

    /// How many rows immediately above the first header row are scanned for
    /// subheader text.
    pub subheader_scan_rows: usize,

    /// Maximum numeric cells a row may contain and still count as a subheader.
    pub subheader_max_numeric: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            label_min_chars: 12,
            header_gap_tolerance: 2,
            header_merge_max_gap: None,
            subheader_scan_rows: 2,
            subheader_max_numeric: 1,
        }
    }
}

/// Configuration for one batch run over a directory of spreadsheet files.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Directory scanned for spreadsheet files.
    pub input_dir: PathBuf,

    /// Directory the per-file chunk directories are written into.
    pub output_dir: PathBuf,

    /// Sheet name patterns for filtering which sheets to process.
    pub sheet_patterns: Vec<Pattern>,

    /// Classification thresholds forwarded to the extraction engine.
    pub engine: EngineConfig,
}

impl BatchConfig {
    /// Checks if a sheet name matches the configured patterns.
    /// Returns true if no patterns are specified or if the name matches any pattern.
    pub fn accepts_sheet(&self, sheet_name: &str) -> bool {
        self.sheet_patterns.is_empty()
            || self.sheet_patterns.iter().any(|pattern| pattern.matches(sheet_name))
    }
}
