//! # sheetgrain
//!
//! Segments irregular, human-authored spreadsheets into discrete,
//! self-describing JSON records ("chunks") suitable for downstream indexing.
//!
//! A worksheet arrives as an untyped grid with no schema: section titles,
//! multi-row headers, grouped fund labels and data rows of varying shape all
//! mixed together. The crate infers the structure heuristically:
//!
//! - the first two rows become the worksheet's **global header**;
//! - fully empty rows split the body into **tables**;
//! - within a table, header-shaped rows merge into **column names** and the
//!   rows just above them become **subheaders**;
//! - every qualifying data row is emitted as one **chunk**: its source
//!   identity, the header context, and a column → normalized-value mapping.
//!
//! The [`engine`] module is the pure core; [`spreadsheet`] is the workbook
//! input boundary (Excel and OpenDocument formats via calamine); [`batch`]
//! drives whole directories and writes the JSON output.
//!
//! ```no_run
//! use sheetgrain::{EngineConfig, Spreadsheet};
//!
//! # fn main() -> Result<(), sheetgrain::SheetgrainError> {
//! let mut workbook = Spreadsheet::open("factsheet.xlsx")?;
//! for name in workbook.sheet_names() {
//!     let worksheet = workbook.worksheet(&name)?;
//!     let chunks = sheetgrain::process_worksheet(&worksheet, "factsheet", &EngineConfig::default());
//!     println!("{name}: {} chunk(s)", chunks.len());
//! }
//! # Ok(())
//! # }
//! ```
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod spreadsheet;

pub use config::{BatchConfig, EngineConfig};
pub use engine::{process_worksheet, Chunk, DataMap, Value};
pub use error::SheetgrainError;
pub use spreadsheet::{Spreadsheet, Worksheet};
