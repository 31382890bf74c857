//! Tree documents exported from the management API
//!
//! A document is the JSON returned when requesting a connection group tree:
//! either a single root group, or an object keyed by data source name whose
//! values are root groups.

use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use crate::error::{DocumentError, DocumentResult};
use crate::models::ConnectionGroup;
use crate::tracing::span_names;

/// Key whose presence marks a document as a single root group
const GROUP_MARKER: &str = "identifier";

/// Parsed contents of a tree document
#[derive(Debug, Clone, PartialEq)]
pub enum TreeDocument {
    /// A single root group; its data source is supplied by the caller
    Single(Rc<ConnectionGroup>),
    /// Root groups keyed by data source name
    PerDataSource(BTreeMap<String, Rc<ConnectionGroup>>),
}

impl TreeDocument {
    /// Returns the root groups keyed by data source
    ///
    /// A single-group document is placed under `default_data_source`.
    #[must_use]
    pub fn into_sources(self, default_data_source: &str) -> BTreeMap<String, Rc<ConnectionGroup>> {
        match self {
            Self::Single(root) => BTreeMap::from([(default_data_source.to_string(), root)]),
            Self::PerDataSource(sources) => sources,
        }
    }

    /// Number of data sources in the document
    #[must_use]
    pub fn source_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::PerDataSource(sources) => sources.len(),
        }
    }
}

/// Parses a tree document from JSON
///
/// An object with an `identifier` key is a single root group; any other
/// value must be an object of root groups keyed by data source.
///
/// # Errors
///
/// Returns `DocumentError::Parse` naming the offending field if the JSON is
/// neither a connection group nor an object of connection groups.
pub fn parse_document(json: &str) -> DocumentResult<TreeDocument> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(parse_error)?;

    if value.get(GROUP_MARKER).is_some() {
        serde_json::from_value(value)
            .map(TreeDocument::Single)
            .map_err(parse_error)
    } else {
        serde_json::from_value(value)
            .map(TreeDocument::PerDataSource)
            .map_err(parse_error)
    }
}

fn parse_error(e: serde_json::Error) -> DocumentError {
    DocumentError::Parse(e.to_string())
}

/// Reads and parses a tree document from a file
///
/// # Errors
///
/// Returns `DocumentError::Io` if the file cannot be read, or
/// `DocumentError::Parse` if its contents are not a tree document.
pub fn load_document(path: &Path) -> DocumentResult<TreeDocument> {
    let _span =
        crate::trace_operation_debug!(span_names::DOCUMENT_LOAD, path = %path.display()).entered();

    let json = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&json)?;

    tracing::debug!(sources = document.source_count(), "Loaded tree document");
    Ok(document)
}
