//! # Workbook Input Boundary
//!
//! Opens Excel (.xlsx, .xlsm, .xlam, .xlsb, .xls, .xla) and OpenDocument
//! (.ods) files and materializes each sheet as a dense grid of raw cell
//! values. The grid is anchored at physical row 0 / column 0 so that chunk
//! row numbers always reflect the position a user sees in their spreadsheet
//! application; cells the file does not store are filled with `Data::Empty`.
use crate::error::SheetgrainError;
use crate::error::SheetgrainError::InvalidFileFormat;
use calamine::{open_workbook, Data, Ods, Range, Reader, Xls, Xlsb, Xlsx};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Type alias for buffered file reader
pub type FileReader = BufReader<File>;

/// File extensions the batch driver considers spreadsheet files.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlam", "xlsb", "xls", "xla", "ods"];

/// Wrapper enum for different spreadsheet format readers.
///
/// Provides a unified interface over the workbook formats supported by the
/// calamine library, abstracting away the differences between formats.
pub enum Spreadsheet {
    /// Excel 2007+ format reader (.xlsx, .xlsm, .xlam)
    Xlsx(Xlsx<FileReader>),
    /// Excel Binary format reader (.xlsb)
    Xlsb(Xlsb<FileReader>),
    /// Legacy Excel format reader (.xls, .xla)
    Xls(Xls<FileReader>),
    /// OpenDocument format reader (.ods)
    Ods(Ods<FileReader>),
}

impl Spreadsheet {
    /// Opens a spreadsheet file, detecting the format from the file extension.
    pub fn open<P>(path: P) -> Result<Spreadsheet, SheetgrainError>
    where
        P: AsRef<Path>,
    {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("xlsx") | Some("xlsm") | Some("xlam") => Ok(Self::Xlsx(open_workbook(path)?)),
            Some("xlsb") => Ok(Self::Xlsb(open_workbook(path)?)),
            Some("xls") | Some("xla") => Ok(Self::Xls(open_workbook(path)?)),
            Some("ods") => Ok(Self::Ods(open_workbook(path)?)),
            _ => Err(InvalidFileFormat {
                name: path.as_ref().to_string_lossy().to_string(),
            }),
        }
    }

    /// Returns the names of all sheets in file-defined order.
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Self::Xlsx(xlsx) => xlsx.sheet_names(),
            Self::Xlsb(xlsb) => xlsb.sheet_names(),
            Self::Xls(xls) => xls.sheet_names(),
            Self::Ods(ods) => ods.sheet_names(),
        }
    }

    /// Reads one sheet into a densely addressed [`Worksheet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet does not exist or its data cannot be
    /// parsed from the underlying file.
    pub fn worksheet(&mut self, sheet_name: &str) -> Result<Worksheet, SheetgrainError> {
        let range = match self {
            Self::Xlsx(xlsx) => xlsx.worksheet_range(sheet_name)?,
            Self::Xlsb(xlsb) => xlsb.worksheet_range(sheet_name)?,
            Self::Xls(xls) => xls.worksheet_range(sheet_name)?,
            Self::Ods(ods) => ods.worksheet_range(sheet_name)?,
        };
        Ok(Worksheet::from_range(sheet_name, &range))
    }
}

/// One worksheet: a name plus its rows in physical order.
///
/// Rows are 0-indexed from the top of the sheet and uniformly wide; positions
/// the file leaves unaddressed hold `Data::Empty`. Row order is authoritative
/// and never reordered.
#[derive(Clone, Debug)]
pub struct Worksheet {
    /// Sheet name
    pub name: String,
    /// Dense grid of raw cell values
    pub rows: Vec<Vec<Data>>,
}

impl Worksheet {
    /// Densifies a calamine range into a grid anchored at physical (0, 0).
    ///
    /// The range's own origin may sit anywhere in the sheet; leading rows and
    /// columns are padded with empty cells so indices stay physical.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = Vec::new();
        if let (Some(start), Some(end)) = (range.start(), range.end()) {
            let height = end.0 as usize + 1;
            let width = end.1 as usize + 1;
            rows = vec![vec![Data::Empty; width]; height];
            for (row, col, value) in range.used_cells() {
                rows[start.0 as usize + row][start.1 as usize + col] = value.clone();
            }
        }
        Worksheet {
            name: name.to_owned(),
            rows,
        }
    }

    /// Returns true if the sheet contains no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
