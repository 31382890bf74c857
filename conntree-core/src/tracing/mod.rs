//! Tracing integration for structured logging
//!
//! Wraps `tracing-subscriber` setup so binaries can initialise logging once
//! with a level and an output destination, and defines the span names used
//! across the workspace.

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Set by the first call to `init_tracing`
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors raised while installing the log subscriber
#[derive(Debug, Error)]
pub enum TracingError {
    /// The filter or subscriber could not be set up
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// `init_tracing` was called more than once
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// The log file could not be created
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for logging setup
pub type TracingResult<T> = Result<T, TracingError>;

/// Minimum severity of emitted events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Adds progress messages such as tree sizes
    Info,
    /// Adds per-build and per-load details
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Maps a `-v` repetition count to a level, starting from `Warn`
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard error, keeping stdout free for command output
    #[default]
    Stderr,
    /// A file, truncated on initialization
    File(PathBuf),
}

/// Logging setup for a process
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Minimum level for this workspace's crates
    pub level: TracingLevel,
    /// Where log lines go
    pub output: TracingOutput,
}

impl TracingConfig {
    /// Creates a configuration logging warnings to stderr
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets where log lines go
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Builds the `EnvFilter` directive for this configuration
    #[must_use]
    pub fn filter_directive(&self) -> String {
        format!(
            "conntree_core={level},conntree_cli={level}",
            level = self.level
        )
    }
}

/// Installs the global subscriber described by `config`
///
/// Only the first call in a process succeeds.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter directive is invalid or the subscriber fails to initialize
/// - File output is configured but the file cannot be created
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    match &config.output {
        TracingOutput::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
        TracingOutput::File(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| TracingError::FileCreationFailed(e.to_string()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    }
    .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(level = %config.level, "Tracing initialized");

    Ok(())
}

/// Creates an info-level span named after an operation
///
/// # Examples
///
/// ```ignore
/// use conntree_core::trace_operation;
///
/// let _span = trace_operation!("document.load", path = %path.display());
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        ::tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        ::tracing::info_span!($name, $($field)*)
    };
}

/// Creates a debug-level span named after an operation
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        ::tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        ::tracing::debug_span!($name, $($field)*)
    };
}

/// Span names shared across the library
pub mod span_names {
    /// Building a node tree from entities
    pub const TREE_BUILD: &str = "tree.build";
    /// Rendering a document's node tree from the command line
    pub const TREE_RENDER: &str = "tree.render";
    /// Loading a tree document
    pub const DOCUMENT_LOAD: &str = "document.load";
    /// Loading settings
    pub const CONFIG_LOAD: &str = "config.load";
}
