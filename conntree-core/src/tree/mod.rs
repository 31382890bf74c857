//! Connection tree nodes
//!
//! Converts connections, connection groups and sharing profiles into a
//! uniform tree of [`TreeNode`]s for hierarchical list views, and provides
//! traversal, ordering and filtering over the result.

mod builder;
mod node;
mod walk;

pub use builder::{ConnectionCounter, GroupCounter, TreeOptions, build_forest};
pub use node::{CountAccessor, NodeEntity, NodeKind, TreeNode};
pub use walk::Descendants;
