//! Settings structures and their TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::identifier::LEGACY_DATA_SOURCE;
use crate::tracing::{TracingLevel, span_names};
use crate::tree::TreeOptions;

/// File name of the settings file inside the configuration directory
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Tree building settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSettings {
    /// Data source assumed for documents holding a single root group
    pub default_data_source: String,
    /// Whether connections are listed under their groups
    pub include_connections: bool,
    /// Whether sharing profiles are listed under their connections
    pub include_sharing_profiles: bool,
    /// Whether nodes start expanded
    pub expanded: bool,
    /// Whether siblings are ordered by weight and name instead of source order
    pub sort: bool,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            default_data_source: LEGACY_DATA_SOURCE.to_string(),
            include_connections: true,
            include_sharing_profiles: true,
            expanded: false,
            sort: false,
            logging: LoggingSettings::default(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level of emitted events (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::default().to_string(),
        }
    }
}

impl TreeSettings {
    /// Returns the default settings file path (`<config dir>/conntree/settings.toml`)
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("conntree").join(SETTINGS_FILE_NAME))
    }

    /// Parses and validates settings from TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for out-of-range values.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes settings to TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Loads settings from a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or any
    /// error from reading or parsing it.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let _span =
            crate::trace_operation_debug!(span_names::CONFIG_LOAD, path = %path.display())
                .entered();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded settings");
        Ok(settings)
    }

    /// Loads settings from an explicit path, or from the default path when it
    /// exists, or falls back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing or any settings file
    /// that is present cannot be parsed.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Checks that all values are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_data_source.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "default_data_source".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.logging.level.parse::<TracingLevel>().is_err() {
            return Err(ConfigError::Validation {
                field: "logging.level".to_string(),
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }

        Ok(())
    }

    /// Returns the configured log level, falling back to the default
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.logging.level.parse().unwrap_or_default()
    }

    /// Returns tree options matching these settings
    #[must_use]
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions::new()
            .with_connections(self.include_connections)
            .with_sharing_profiles(self.include_sharing_profiles)
            .with_expanded(self.expanded)
    }
}
