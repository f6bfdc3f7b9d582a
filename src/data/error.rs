//! Data preparation error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or preparing the datasets
#[derive(Error, Debug)]
pub enum DataError {
    /// Input file could not be opened
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row could not be read or deserialized
    #[error("CSV error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    /// Region label with no entry in the region palette
    #[error("Unknown region {value:?} at line {line}")]
    UnknownRegion { line: usize, value: String },

    /// Quartile label with no entry in the quartile palette
    #[error("Unknown quartile {value:?} at line {line}")]
    UnknownQuartile { line: usize, value: String },

    /// Second row for a key that must be unique
    #[error("Duplicate record {key} at line {line}")]
    DuplicateRecord { line: usize, key: String },

    /// NaN or infinite numeric value
    #[error("Non-finite value in column {column:?} at line {line}")]
    NonFinite { line: usize, column: &'static str },

    /// NaN or infinite value handed to the scaler
    #[error("Non-finite value at index {index}")]
    NonFiniteInput { index: usize },

    /// Min-max scaling over an empty column
    #[error("Cannot scale an empty column")]
    EmptyColumn,

    /// Dataset without any rows
    #[error("Dataset {0} has no records")]
    EmptyDataset(&'static str),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
