//! Error types for cloudtxt

use thiserror::Error;

/// Main error type for cloudtxt core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A point needs exactly 3 coordinates, got {0}")]
    InvalidPointArity(usize),
}

/// Result type alias for cloudtxt core operations
pub type Result<T> = std::result::Result<T, Error>;
