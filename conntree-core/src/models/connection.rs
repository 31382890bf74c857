//! Connection model.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SharingProfile;

/// A leaf remote-access target
///
/// The active connection count is interior-mutable: a polling layer may
/// refresh it after a tree has been built from this connection, and nodes
/// referencing the connection observe the new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Identifier unique within the data source
    pub identifier: String,
    /// Identifier of the containing connection group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_identifier: Option<String>,
    /// Human-readable name
    pub name: String,
    /// Protocol name (e.g. "ssh", "rdp", "vnc")
    pub protocol: String,
    /// Number of users currently connected, if known
    #[serde(default)]
    active_connections: Cell<Option<u32>>,
    /// Sharing profiles of this connection, if they were requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_profiles: Option<Vec<Rc<SharingProfile>>>,
    /// Arbitrary attributes exposed by the data source
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Option<String>>,
    /// When the connection was last used (milliseconds since the epoch on the wire)
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_active: Option<DateTime<Utc>>,
}

impl Connection {
    /// Creates a new connection without sharing profiles or activity data
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            parent_identifier: None,
            name: name.into(),
            protocol: protocol.into(),
            active_connections: Cell::new(None),
            sharing_profiles: None,
            attributes: HashMap::new(),
            last_active: None,
        }
    }

    /// Sets the identifier of the containing group
    #[must_use]
    pub fn with_parent(mut self, identifier: impl Into<String>) -> Self {
        self.parent_identifier = Some(identifier.into());
        self
    }

    /// Sets the active connection count
    #[must_use]
    pub fn with_active_connections(self, count: u32) -> Self {
        self.active_connections.set(Some(count));
        self
    }

    /// Appends a sharing profile, creating the profile list if absent
    #[must_use]
    pub fn with_sharing_profile(mut self, profile: impl Into<Rc<SharingProfile>>) -> Self {
        self.sharing_profiles
            .get_or_insert_with(Vec::new)
            .push(profile.into());
        self
    }

    /// Returns the active connection count as currently known
    pub fn active_connections(&self) -> Option<u32> {
        self.active_connections.get()
    }

    /// Replaces the active connection count
    pub fn set_active_connections(&self, count: Option<u32>) {
        self.active_connections.set(count);
    }

    /// Returns the sharing profiles, treating an absent list as empty
    pub fn sharing_profiles(&self) -> &[Rc<SharingProfile>] {
        self.sharing_profiles.as_deref().unwrap_or_default()
    }
}
