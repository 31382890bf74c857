//! Sharing profile model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named, restricted-permission variant of a connection which can be
/// shared with other users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingProfile {
    /// Identifier unique within the data source
    pub identifier: String,
    /// Identifier of the connection this profile shares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_connection_identifier: Option<String>,
    /// Human-readable name
    pub name: String,
    /// Arbitrary attributes exposed by the data source
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Option<String>>,
}

impl SharingProfile {
    /// Creates a new sharing profile with no primary connection set
    #[must_use]
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            primary_connection_identifier: None,
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the identifier of the connection being shared
    #[must_use]
    pub fn with_primary_connection(mut self, identifier: impl Into<String>) -> Self {
        self.primary_connection_identifier = Some(identifier.into());
        self
    }
}
