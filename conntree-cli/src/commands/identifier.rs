//! Client identifier commands.

use conntree_core::identifier::{ClientIdentifier, ClientIdentifierType};

use crate::error::CliError;

/// Prints the encoded client identifier for an object
pub fn cmd_encode(data_source: &str, kind: ClientIdentifierType, id: &str) -> Result<(), CliError> {
    println!("{}", ClientIdentifier::new(data_source, kind, id));
    Ok(())
}

/// Prints the parts of a client identifier
pub fn cmd_decode(value: &str, lenient: bool) -> Result<(), CliError> {
    let identifier = if lenient {
        ClientIdentifier::parse_lenient(value)
    } else {
        ClientIdentifier::decode(value)?
    };

    println!("{}", format_decoded(&identifier));
    Ok(())
}

/// Formats the parts of a decoded identifier, one per line
#[must_use]
pub fn format_decoded(identifier: &ClientIdentifier) -> String {
    let kind = match identifier.kind {
        ClientIdentifierType::Connection => "connection",
        ClientIdentifierType::ConnectionGroup => "connection-group",
        ClientIdentifierType::ActiveConnection => "active-connection",
    };
    format!(
        "id: {}\ntype: {kind}\ndata source: {}",
        identifier.id, identifier.data_source
    )
}
