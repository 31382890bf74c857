//! `conntree` Core Library
//!
//! Turns connections, connection groups and sharing profiles fetched from a
//! remote-access management API into a uniform tree of display nodes for
//! hierarchical list views.
//!
//! # Crate Structure
//!
//! - [`models`] - Domain entities (Connection, ConnectionGroup, SharingProfile)
//! - [`tree`] - Tree nodes, the tree factory, traversal and filtering
//! - [`identifier`] - Client identifier encoding and decoding
//! - [`document`] - Loading exported group trees from JSON
//! - [`config`] - Settings persisted as TOML
//! - [`tracing`] - Logging setup

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod identifier;
pub mod models;
pub mod tracing;
pub mod tree;

pub use config::{LoggingSettings, TreeSettings};
pub use document::{TreeDocument, load_document, parse_document};
pub use error::{ConfigError, ConfigResult, DocumentError, DocumentResult};
pub use identifier::{ClientIdentifier, ClientIdentifierType, IdentifierError};
pub use models::{Connection, ConnectionGroup, ConnectionGroupType, SharingProfile};
pub use crate::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};
pub use tree::{
    ConnectionCounter, CountAccessor, GroupCounter, NodeEntity, NodeKind, TreeNode, TreeOptions,
    build_forest,
};
