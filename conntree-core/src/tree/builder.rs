//! Construction of node trees from domain entities
//!
//! The build is a synchronous depth-first walk. Nothing is validated: the
//! entity graph is assumed to be a tree, as delivered by the management
//! API. Active connection counters are captured, not called; they run only
//! when a node's `active_connections` is read.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::node::{CountAccessor, NodeEntity, TreeNode};
use crate::models::{Connection, ConnectionGroup, SharingProfile};
use crate::tracing::span_names;

/// Computes the active connection count of a connection
///
/// Receives the data source and the connection.
pub type ConnectionCounter = Rc<dyn Fn(&str, &Connection) -> Option<u32>>;

/// Computes the active connection count of a connection group
///
/// Receives the data source and the group.
pub type GroupCounter = Rc<dyn Fn(&str, &ConnectionGroup) -> Option<u32>>;

/// Options controlling which entities become nodes
///
/// Defaults: connections and sharing profiles are included, nodes start
/// collapsed, and active counts come from the entities themselves.
#[derive(Clone)]
pub struct TreeOptions {
    /// Whether group nodes get children for their connections
    pub include_connections: bool,
    /// Whether connection nodes get children for their sharing profiles
    pub include_sharing_profiles: bool,
    /// Initial expanded state of every built node
    pub expanded: bool,
    /// Replaces the connection's own active count when set
    pub connection_counter: Option<ConnectionCounter>,
    /// Replaces the group's own active count when set
    pub group_counter: Option<GroupCounter>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            include_connections: true,
            include_sharing_profiles: true,
            expanded: false,
            connection_counter: None,
            group_counter: None,
        }
    }
}

impl fmt::Debug for TreeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeOptions")
            .field("include_connections", &self.include_connections)
            .field("include_sharing_profiles", &self.include_sharing_profiles)
            .field("expanded", &self.expanded)
            .field("connection_counter", &self.connection_counter.is_some())
            .field("group_counter", &self.group_counter.is_some())
            .finish()
    }
}

impl TreeOptions {
    /// Creates options with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether connections are included under groups
    #[must_use]
    pub const fn with_connections(mut self, include: bool) -> Self {
        self.include_connections = include;
        self
    }

    /// Sets whether sharing profiles are included under connections
    #[must_use]
    pub const fn with_sharing_profiles(mut self, include: bool) -> Self {
        self.include_sharing_profiles = include;
        self
    }

    /// Sets the initial expanded state of built nodes
    #[must_use]
    pub const fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Sets the counter used for connection nodes
    #[must_use]
    pub fn with_connection_counter<F>(mut self, counter: F) -> Self
    where
        F: Fn(&str, &Connection) -> Option<u32> + 'static,
    {
        self.connection_counter = Some(Rc::new(counter));
        self
    }

    /// Sets the counter used for connection group nodes
    #[must_use]
    pub fn with_group_counter<F>(mut self, counter: F) -> Self
    where
        F: Fn(&str, &ConnectionGroup) -> Option<u32> + 'static,
    {
        self.group_counter = Some(Rc::new(counter));
        self
    }
}

impl TreeNode {
    /// Builds a node for a connection, with one child per sharing profile
    /// when sharing profiles are included
    ///
    /// The node is expandable exactly when sharing profiles are included.
    #[must_use]
    pub fn from_connection(
        data_source: &str,
        connection: &Rc<Connection>,
        options: &TreeOptions,
    ) -> Self {
        let _span = crate::trace_operation_debug!(
            span_names::TREE_BUILD,
            data_source = %data_source,
            connection_id = %connection.identifier
        )
        .entered();

        connection_node(data_source, connection, options)
    }

    /// Builds a node for a connection group and its whole subtree
    ///
    /// Child connections (when included) come first, followed by child
    /// groups, each in source order. Group nodes are always expandable.
    #[must_use]
    pub fn from_connection_group(
        data_source: &str,
        group: &Rc<ConnectionGroup>,
        options: &TreeOptions,
    ) -> Self {
        let _span = crate::trace_operation_debug!(
            span_names::TREE_BUILD,
            data_source = %data_source,
            group_id = %group.identifier
        )
        .entered();

        let node = group_node(data_source, group, options);
        tracing::debug!(
            child_count = node.children.len(),
            balancing = node.balancing,
            "Built connection group node"
        );
        node
    }

    /// Builds a leaf node for a sharing profile
    ///
    /// Sharing profiles have no activity count of their own and no client
    /// identifier.
    #[must_use]
    pub fn from_sharing_profile(
        data_source: &str,
        profile: &Rc<SharingProfile>,
        options: &TreeOptions,
    ) -> Self {
        sharing_profile_node(data_source, profile, options)
    }
}

/// Builds one root node per data source, ordered by data source name
#[must_use]
pub fn build_forest(
    sources: &BTreeMap<String, Rc<ConnectionGroup>>,
    options: &TreeOptions,
) -> Vec<TreeNode> {
    sources
        .iter()
        .map(|(data_source, root)| TreeNode::from_connection_group(data_source, root, options))
        .collect()
}

fn connection_node(
    data_source: &str,
    connection: &Rc<Connection>,
    options: &TreeOptions,
) -> TreeNode {
    let children = if options.include_sharing_profiles {
        connection
            .sharing_profiles()
            .iter()
            .map(|profile| sharing_profile_node(data_source, profile, options))
            .collect()
    } else {
        Vec::new()
    };

    let active_connections: CountAccessor = match &options.connection_counter {
        Some(counter) => {
            let counter = Rc::clone(counter);
            let data_source = data_source.to_string();
            let connection = Rc::clone(connection);
            Rc::new(move || counter(&data_source, &connection))
        }
        None => {
            let connection = Rc::clone(connection);
            Rc::new(move || connection.active_connections())
        }
    };

    TreeNode {
        data_source: data_source.to_string(),
        identifier: connection.identifier.clone(),
        name: connection.name.clone(),
        protocol: Some(connection.protocol.clone()),
        children,
        entity: NodeEntity::Connection(Rc::clone(connection)),
        expandable: options.include_sharing_profiles,
        balancing: false,
        expanded: options.expanded,
        active_connections: Some(active_connections),
        weight: 0,
    }
}

fn group_node(data_source: &str, group: &Rc<ConnectionGroup>, options: &TreeOptions) -> TreeNode {
    let mut children = Vec::new();

    if options.include_connections {
        children.extend(
            group
                .connections()
                .iter()
                .map(|connection| connection_node(data_source, connection, options)),
        );
    }

    children.extend(
        group
            .groups()
            .iter()
            .map(|child| group_node(data_source, child, options)),
    );

    let active_connections: CountAccessor = match &options.group_counter {
        Some(counter) => {
            let counter = Rc::clone(counter);
            let data_source = data_source.to_string();
            let group = Rc::clone(group);
            Rc::new(move || counter(&data_source, &group))
        }
        None => {
            let group = Rc::clone(group);
            Rc::new(move || group.active_connections())
        }
    };

    TreeNode {
        data_source: data_source.to_string(),
        identifier: group.identifier.clone(),
        name: group.name.clone(),
        protocol: None,
        children,
        entity: NodeEntity::ConnectionGroup(Rc::clone(group)),
        expandable: true,
        balancing: group.is_balancing(),
        expanded: options.expanded,
        active_connections: Some(active_connections),
        weight: 0,
    }
}

fn sharing_profile_node(
    data_source: &str,
    profile: &Rc<SharingProfile>,
    options: &TreeOptions,
) -> TreeNode {
    TreeNode {
        data_source: data_source.to_string(),
        identifier: profile.identifier.clone(),
        name: profile.name.clone(),
        protocol: None,
        children: Vec::new(),
        entity: NodeEntity::SharingProfile(Rc::clone(profile)),
        expandable: false,
        balancing: false,
        expanded: options.expanded,
        active_connections: None,
        weight: 0,
    }
}
