use crate::cli::ArgError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for gbff2gff operations.
///
/// Malformed locations, missing ids and missing lengths are not errors; the
/// parser recovers from those locally. Only file-level failures end up here.
#[derive(Debug, Error)]
pub enum Gbff2GffError {
    /// Input file does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// Command-line arguments failed validation.
    #[error("invalid arguments: {0}")]
    InvalidArgs(#[from] ArgError),
    /// Failed to build a Rayon thread pool.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gbff2gff operations.
pub type Result<T> = std::result::Result<T, Gbff2GffError>;
