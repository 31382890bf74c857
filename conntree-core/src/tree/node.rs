//! Tree node representation
//!
//! A `TreeNode` is the uniform shape of every row in the connection tree:
//! connections, connection groups, sharing profiles and caller-defined
//! custom rows. Structure is fixed once built; only the expanded flag is
//! changed afterwards, by whatever renders the tree.

use std::fmt;
use std::rc::Rc;

use crate::identifier::{ClientIdentifier, ClientIdentifierType};
use crate::models::{Connection, ConnectionGroup, SharingProfile};

/// Lazily evaluated active connection count
///
/// Evaluated on every call; results are never cached.
pub type CountAccessor = Rc<dyn Fn() -> Option<u32>>;

/// Kind of object a node represents
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A connection
    Connection,
    /// A connection group
    ConnectionGroup,
    /// A sharing profile of a connection
    SharingProfile,
    /// A caller-defined row type
    Custom(String),
}

impl NodeKind {
    /// Returns the type tag for this kind
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connection => "connection",
            Self::ConnectionGroup => "connection-group",
            Self::SharingProfile => "sharing-profile",
            Self::Custom(tag) => tag,
        }
    }

    /// Returns the client identifier type for this kind, if nodes of this
    /// kind can be addressed by the client
    #[must_use]
    pub const fn client_identifier_type(&self) -> Option<ClientIdentifierType> {
        match self {
            Self::Connection => Some(ClientIdentifierType::Connection),
            Self::ConnectionGroup => Some(ClientIdentifierType::ConnectionGroup),
            Self::SharingProfile | Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The domain object a node was built from
#[derive(Debug, Clone)]
pub enum NodeEntity {
    /// Built from a connection
    Connection(Rc<Connection>),
    /// Built from a connection group
    ConnectionGroup(Rc<ConnectionGroup>),
    /// Built from a sharing profile
    SharingProfile(Rc<SharingProfile>),
    /// Caller-defined row with no backing entity, carrying its type tag
    Custom(String),
}

impl NodeEntity {
    /// Returns the node kind matching this entity
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Connection(_) => NodeKind::Connection,
            Self::ConnectionGroup(_) => NodeKind::ConnectionGroup,
            Self::SharingProfile(_) => NodeKind::SharingProfile,
            Self::Custom(tag) => NodeKind::Custom(tag.clone()),
        }
    }

    /// Returns the wrapped connection, if any
    #[must_use]
    pub const fn as_connection(&self) -> Option<&Rc<Connection>> {
        match self {
            Self::Connection(connection) => Some(connection),
            _ => None,
        }
    }

    /// Returns the wrapped connection group, if any
    #[must_use]
    pub const fn as_connection_group(&self) -> Option<&Rc<ConnectionGroup>> {
        match self {
            Self::ConnectionGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the wrapped sharing profile, if any
    #[must_use]
    pub const fn as_sharing_profile(&self) -> Option<&Rc<SharingProfile>> {
        match self {
            Self::SharingProfile(profile) => Some(profile),
            _ => None,
        }
    }
}

/// A single row of the connection tree together with its subtree
#[derive(Clone)]
pub struct TreeNode {
    pub(super) data_source: String,
    pub(super) identifier: String,
    pub(super) name: String,
    pub(super) protocol: Option<String>,
    pub(super) children: Vec<TreeNode>,
    pub(super) entity: NodeEntity,
    pub(super) expandable: bool,
    pub(super) balancing: bool,
    pub(super) expanded: bool,
    pub(super) active_connections: Option<CountAccessor>,
    pub(super) weight: i32,
}

impl TreeNode {
    /// Creates a caller-defined node with no children
    ///
    /// Custom nodes are not expandable unless `with_expandable` says so, and
    /// never produce a client identifier.
    #[must_use]
    pub fn custom(
        data_source: impl Into<String>,
        identifier: impl Into<String>,
        name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            data_source: data_source.into(),
            identifier: identifier.into(),
            name: name.into(),
            protocol: None,
            children: Vec::new(),
            entity: NodeEntity::Custom(tag.into()),
            expandable: false,
            balancing: false,
            expanded: false,
            active_connections: None,
            weight: 0,
        }
    }

    /// Replaces the children of this node
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Appends a child node
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets whether this node can be expanded
    #[must_use]
    pub const fn with_expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    /// Sets the initial expanded state
    #[must_use]
    pub const fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Sets the sort weight
    #[must_use]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the accessor used by `active_connections`
    #[must_use]
    pub fn with_active_connections<F>(mut self, accessor: F) -> Self
    where
        F: Fn() -> Option<u32> + 'static,
    {
        self.active_connections = Some(Rc::new(accessor));
        self
    }

    /// Data source the wrapped entity belongs to
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    /// Identifier of the wrapped entity within its data source
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Protocol name, set only for connections
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Child nodes in display order
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// The entity this node was built from
    pub const fn entity(&self) -> &NodeEntity {
        &self.entity
    }

    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        self.entity.kind()
    }

    /// Whether nodes of this kind can have children, regardless of whether
    /// this one currently does
    pub const fn is_expandable(&self) -> bool {
        self.expandable
    }

    /// Whether this node is a balancing connection group
    pub const fn is_balancing(&self) -> bool {
        self.balancing
    }

    /// Whether the node is currently shown expanded
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Changes the expanded state
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Sort weight used to order siblings before falling back to name
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns the current number of active connections, if known
    ///
    /// Re-evaluates the underlying accessor on every call.
    pub fn active_connections(&self) -> Option<u32> {
        self.active_connections.as_ref().and_then(|accessor| accessor())
    }

    /// Returns the encoded client identifier of the wrapped entity
    ///
    /// Only connections and connection groups have client identifiers;
    /// every other kind yields `None`.
    pub fn client_identifier(&self) -> Option<String> {
        let kind = self.kind().client_identifier_type()?;
        Some(ClientIdentifier::new(&self.data_source, kind, &self.identifier).encode())
    }

    /// Copies this node without its children
    pub(super) fn shallow_clone(&self) -> Self {
        Self {
            data_source: self.data_source.clone(),
            identifier: self.identifier.clone(),
            name: self.name.clone(),
            protocol: self.protocol.clone(),
            children: Vec::new(),
            entity: self.entity.clone(),
            expandable: self.expandable,
            balancing: self.balancing,
            expanded: self.expanded,
            active_connections: self.active_connections.clone(),
            weight: self.weight,
        }
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("data_source", &self.data_source)
            .field("identifier", &self.identifier)
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("protocol", &self.protocol)
            .field("expandable", &self.expandable)
            .field("balancing", &self.balancing)
            .field("expanded", &self.expanded)
            .field("weight", &self.weight)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
