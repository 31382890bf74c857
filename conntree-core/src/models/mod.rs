//! Domain entities returned by the remote management API
//!
//! These are the inputs to the tree factory: connections, connection groups
//! and sharing profiles. Field names on the wire follow the API's camelCase
//! convention. Entities are shared through `Rc` so that tree nodes can keep
//! a reference to the object they were built from.

mod connection;
mod group;
mod sharing_profile;

pub use connection::Connection;
pub use group::{ConnectionGroup, ConnectionGroupType, ROOT_IDENTIFIER};
pub use sharing_profile::SharingProfile;
