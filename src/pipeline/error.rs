//! Error types for file-level pipeline operations

use crate::reed_solomon::RsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding, corrupting or decoding a file
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Failed to read or write a file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A block could not be encoded
    #[error("Block {block}: {source}")]
    Codec { block: usize, source: RsError },

    /// Configuration rejected before any work was done
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Worker thread pool could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl From<RsError> for PipelineError {
    fn from(error: RsError) -> Self {
        PipelineError::InvalidConfig(error.to_string())
    }
}

/// Type alias for Result with PipelineError
pub type Result<T> = std::result::Result<T, PipelineError>;
