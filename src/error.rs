//! Error types for the build tools
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the build tools
#[derive(Error, Debug)]
pub enum ToolError {
    /// Configuration errors (missing environment input, bad settings)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Structural errors in the packaging manifest
    #[error("Malformed manifest {}: {message}", path.display())]
    MalformedManifest {
        message: String,
        path: PathBuf,
        /// 1-based line number of the offending line, 0 if file-level
        line: usize,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {}", path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Aggregate failure after a multi-file run completed with errors
    #[error("{failed} of {total} header file(s) failed to process")]
    PartialFailure { failed: usize, total: usize },
}

impl ToolError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new malformed manifest error
    pub fn malformed_manifest<P: Into<PathBuf>>(
        message: impl Into<String>,
        path: P,
        line: usize,
    ) -> Self {
        Self::MalformedManifest {
            message: message.into(),
            path: path.into(),
            line,
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new partial failure error
    pub fn partial_failure(failed: usize, total: usize) -> Self {
        Self::PartialFailure { failed, total }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ToolError>;
