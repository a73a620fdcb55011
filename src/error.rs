use thiserror::Error;

/// Main error type for the sheetgrain crate.
/// Aggregates failures from the workbook boundary, file discovery and chunk output.
/// The extraction engine itself is total and contributes no variants here.
#[derive(Error, Debug)]
pub enum SheetgrainError {
    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Workbook format errors
    #[error("Invalid xlsx file format: {0}")]
    InvalidXlsxFileFormat(#[from] calamine::XlsxError),

    #[error("Invalid xlsb file format: {0}")]
    InvalidXlsbFileFormat(#[from] calamine::XlsbError),

    #[error("Invalid xls file format: {0}")]
    InvalidXlsFileFormat(#[from] calamine::XlsError),

    #[error("Invalid ods file format: {0}")]
    InvalidOdsFileFormat(#[from] calamine::OdsError),

    /// Unsupported or unrecognized file format
    #[error("Cannot detect spreadsheet format for '{name}'")]
    InvalidFileFormat { name: String },

    // Third-party library errors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),
}
