//! CLI error types and exit codes.

use conntree_core::error::{ConfigError, DocumentError};
use conntree_core::identifier::IdentifierError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, logging, output or other errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Input error - the document or identifier given could not be used
    pub const INPUT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tree document error
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Client identifier error
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// Requested data source is not in the document
    #[error("Data source not found: {0}")]
    DataSourceNotFound(String),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),

    /// Output could not be produced
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, logging, output)
    /// - 2: Input error (document, identifier, unknown data source)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Document(_) | Self::Identifier(_) | Self::DataSourceNotFound(_) => {
                exit_codes::INPUT_ERROR
            }
            Self::Config(_) | Self::Logging(_) | Self::Output(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
