//! Figure building error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FigureError {
    /// Mode value that is neither `temporal` nor `delta`
    #[error("Unrecognized mode: {0:?} (expected \"temporal\" or \"delta\")")]
    UnrecognizedMode(String),

    /// Dataset with no rows to plot
    #[error("Dataset {0} has no records to plot")]
    EmptyDataset(&'static str),
}

pub type FigureResult<T> = Result<T, FigureError>;
