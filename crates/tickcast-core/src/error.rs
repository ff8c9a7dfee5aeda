use std::path::PathBuf;

use thiserror::Error;

/// Field-level structural errors for delimited price rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker must contain only alphabetic characters: '{value}'")]
    TickerNotAlphabetic { value: String },

    #[error("date does not parse as DD-MM-YYYY: '{value}'")]
    InvalidDate { value: String },
    #[error("date is not in canonical DD-MM-YYYY form: '{value}'")]
    DateNotCanonical { value: String },

    #[error("price is not a number: '{value}'")]
    UnparseablePrice { value: String },
    #[error("price must be finite")]
    NonFinitePrice,
    #[error("price must be non-negative")]
    NegativePrice,
    #[error("price is not in canonical 2-decimal form: '{value}'")]
    PriceNotCanonical { value: String },
}

/// File-level conditions that skip the current file without aborting the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("insufficient data: {available} rows present where at least 10 are required")]
    InsufficientData { available: usize },

    #[error("malformed record at row {index}: {reason}")]
    MalformedRecord {
        index: usize,
        reason: ValidationError,
    },

    #[error("degenerate window: cannot obtain a second-highest price")]
    DegenerateInput,
}

/// Collaborator-level I/O failures. These are fatal to the run and propagate
/// to the pipeline's caller uncaught.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot list directory '{}': {source}", .path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read rows from '{}': {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },

    #[error("cannot write rows to '{}': {source}", .path.display())]
    Write { path: PathBuf, source: csv::Error },

    #[error("cannot create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
