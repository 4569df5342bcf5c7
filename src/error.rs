//! Error types for Predecir

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Length mismatch: {rows} feature rows vs {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Column '{0}' has no observed values to fit on")]
    EmptyColumn(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Artifact format version mismatch: expected {expected}, got {got}")]
    FormatVersion { expected: u32, got: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
