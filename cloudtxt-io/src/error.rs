//! Error types for point cloud loading

use crate::diagnostics::Severity;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a point cloud load
///
/// Every variant is terminal: the loader stops at the first one and the
/// points read up to that line are dropped.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read point cloud from txt: {} doesn't exist", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("Cannot open point cloud file {}: {source}", path.display())]
    ResourceOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Wrong data format in line {line}. This line has {fields} numbers instead of 3")]
    MalformedLine { line: usize, fields: usize },

    #[error("Wrong data format in line {line}. Please check for typos")]
    InvalidNumber { line: usize },

    #[error("No point cloud found in {}", path.display())]
    EmptyResult { path: PathBuf },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Severity used when reporting this error to a diagnostic sink
    pub fn severity(&self) -> Severity {
        match self {
            LoadError::EmptyResult { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Index of the data line that caused the error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::MalformedLine { line, .. }
            | LoadError::InvalidNumber { line }
            | LoadError::Read { line, .. } => Some(*line),
            _ => None,
        }
    }
}
