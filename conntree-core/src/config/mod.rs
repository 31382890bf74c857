//! Settings for tree building and logging
//!
//! Settings are stored as TOML. Every field is optional; missing fields
//! take their default values.

mod settings;

pub use settings::{LoggingSettings, SETTINGS_FILE_NAME, TreeSettings};
