//! Command handler modules for the CLI.

mod identifier;
mod tree;

use conntree_core::config::TreeSettings;

use crate::cli::{Commands, IdentifierCommands};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(settings: &TreeSettings, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Tree {
            file,
            data_source,
            no_connections,
            no_sharing_profiles,
            expanded,
            sort,
            filter,
            format,
        } => tree::cmd_tree(
            settings,
            &tree::TreeParams {
                file: &file,
                data_source: data_source.as_deref(),
                no_connections,
                no_sharing_profiles,
                expanded,
                sort,
                filter: filter.as_deref(),
                format,
            },
        ),
        Commands::Identifier(IdentifierCommands::Encode {
            id,
            data_source,
            kind,
        }) => identifier::cmd_encode(&data_source, kind.into(), &id),
        Commands::Identifier(IdentifierCommands::Decode { value, lenient }) => {
            identifier::cmd_decode(&value, lenient)
        }
    }
}
