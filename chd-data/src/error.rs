//! Error types for loading the housing dataset.

use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Reading the dataset from disk failed
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to decompress the embedded dataset
    #[error("Failed to decompress dataset: {0}")]
    Decompression(String),

    /// A required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// A cell could not be parsed as a number
    #[error("Invalid value {value:?} in column {column} at row {row}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A record has fewer fields than the header row
    #[error("Row {row} has {found} fields, expected at least {needed}")]
    RaggedRow {
        row: usize,
        needed: usize,
        found: usize,
    },

    /// Columns handed to the table have different lengths
    #[error("Column {column} has {found} values, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    /// The dataset contains no data rows
    #[error("Dataset contains no rows")]
    Empty,

    /// A column name outside the six known columns
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
