//! Connection group model.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Connection;

/// Identifier of the root connection group of every data source
pub const ROOT_IDENTIFIER: &str = "ROOT";

/// Kind of connection group
///
/// Wire names are matched ignoring case. Types other than `BALANCING` are
/// read as organizational, so only balancing groups are ever flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum ConnectionGroupType {
    /// Purely organizational container
    #[default]
    Organizational,
    /// Load-balancing group; connecting to it picks one of its connections
    Balancing,
}

impl ConnectionGroupType {
    /// Returns the wire name of this group type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organizational => "ORGANIZATIONAL",
            Self::Balancing => "BALANCING",
        }
    }
}

impl fmt::Display for ConnectionGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionGroupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ORGANIZATIONAL" => Ok(Self::Organizational),
            "BALANCING" => Ok(Self::Balancing),
            _ => Err(format!("unknown connection group type: {s}")),
        }
    }
}

impl From<String> for ConnectionGroupType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// A container organizing connections and nested groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionGroup {
    /// Identifier unique within the data source
    pub identifier: String,
    /// Identifier of the parent group, absent for the root group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_identifier: Option<String>,
    /// Human-readable name
    pub name: String,
    /// Organizational or balancing
    #[serde(rename = "type", default)]
    pub group_type: ConnectionGroupType,
    /// Number of users currently connected through this group, if known
    #[serde(default)]
    active_connections: Cell<Option<u32>>,
    /// Connections directly inside this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_connections: Option<Vec<Rc<Connection>>>,
    /// Groups directly inside this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_connection_groups: Option<Vec<Rc<ConnectionGroup>>>,
    /// Arbitrary attributes exposed by the data source
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Option<String>>,
}

impl ConnectionGroup {
    /// Creates a new, empty organizational group
    #[must_use]
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            parent_identifier: None,
            name: name.into(),
            group_type: ConnectionGroupType::Organizational,
            active_connections: Cell::new(None),
            child_connections: None,
            child_connection_groups: None,
            attributes: HashMap::new(),
        }
    }

    /// Creates an empty root group
    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_IDENTIFIER, ROOT_IDENTIFIER)
    }

    /// Returns true if this is the root group of its data source
    pub fn is_root(&self) -> bool {
        self.identifier == ROOT_IDENTIFIER
    }

    /// Returns true if this is a balancing group
    pub fn is_balancing(&self) -> bool {
        self.group_type == ConnectionGroupType::Balancing
    }

    /// Sets the group type
    #[must_use]
    pub const fn with_type(mut self, group_type: ConnectionGroupType) -> Self {
        self.group_type = group_type;
        self
    }

    /// Sets the identifier of the parent group
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

    /// Appends a child connection
    #[must_use]
    pub fn with_connection(mut self, connection: impl Into<Rc<Connection>>) -> Self {
        self.child_connections
            .get_or_insert_with(Vec::new)
            .push(connection.into());
        self
    }

    /// Appends a child group
    #[must_use]
    pub fn with_group(mut self, group: impl Into<Rc<Self>>) -> Self {
        self.child_connection_groups
            .get_or_insert_with(Vec::new)
            .push(group.into());
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

    /// Returns the child connections, treating an absent list as empty
    pub fn connections(&self) -> &[Rc<Connection>] {
        self.child_connections.as_deref().unwrap_or_default()
    }

    /// Returns the child groups, treating an absent list as empty
    pub fn groups(&self) -> &[Rc<Self>] {
        self.child_connection_groups.as_deref().unwrap_or_default()
    }
}
