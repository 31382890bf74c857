//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use conntree_core::identifier::ClientIdentifierType;

/// `conntree` command-line interface for inspecting connection trees
#[derive(Parser)]
#[command(name = "conntree-cli")]
#[command(author, version, about = "Inspect connection trees and client identifiers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, env = "CONNTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the node tree of a group tree document
    #[command(about = "Render the node tree built from a group tree document")]
    Tree {
        /// JSON document holding a root group, or root groups keyed by data source
        file: PathBuf,

        /// Data source for single-group documents; restricts output for
        /// multi-source documents
        #[arg(short, long)]
        data_source: Option<String>,

        /// Leave connections out of group nodes
        #[arg(long)]
        no_connections: bool,

        /// Leave sharing profiles out of connection nodes
        #[arg(long)]
        no_sharing_profiles: bool,

        /// Mark every node as expanded
        #[arg(long)]
        expanded: bool,

        /// Order siblings by weight and name instead of document order
        #[arg(long)]
        sort: bool,

        /// Only show nodes whose name or protocol contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: OutputFormat,
    },

    /// Encode or decode client identifiers
    #[command(subcommand)]
    Identifier(IdentifierCommands),
}

/// Client identifier subcommands
#[derive(Subcommand)]
pub enum IdentifierCommands {
    /// Encode an object identifier as a client identifier
    Encode {
        /// Identifier of the object within its data source
        id: String,

        /// Data source the object belongs to
        #[arg(short, long)]
        data_source: String,

        /// Type of object
        #[arg(short, long, default_value = "connection", value_enum)]
        kind: KindArg,
    },

    /// Decode a client identifier
    Decode {
        /// Encoded client identifier
        value: String,

        /// Treat undecodable values as legacy connection identifiers
        #[arg(long)]
        lenient: bool,
    },
}

/// Output format for rendered trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text, one node per line
    Text,
    /// Nested JSON
    Json,
}

/// Type of object named by a client identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// A connection
    Connection,
    /// A connection group
    Group,
    /// An active connection
    Active,
}

impl From<KindArg> for ClientIdentifierType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Connection => Self::Connection,
            KindArg::Group => Self::ConnectionGroup,
            KindArg::Active => Self::ActiveConnection,
        }
    }
}
