//! Error types for `conntree-core`
//!
//! Building a tree never fails; errors only arise at the edges where
//! settings and tree documents are read from disk or decoded.

use std::path::PathBuf;

use thiserror::Error;

/// Errors related to settings files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a settings file
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Failed to serialize settings
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// A setting has an invalid value
    #[error("Invalid value for {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The settings file does not exist
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the settings file
    #[error("Failed to read configuration: {0}")]
    Read(String),
}

/// Errors related to tree documents exported from the management API
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read the document
    #[error("Failed to read document {path}: {source}")]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not a connection group or a map of them
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
