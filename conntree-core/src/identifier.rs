//! Client identifiers
//!
//! A client identifier is the opaque token the web client uses to refer to
//! a connectable object: the object's identifier, a one-character type code
//! and the data source name, joined with NUL separators and encoded as
//! standard base64.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Data source assumed for identifiers that predate data source support
pub const LEGACY_DATA_SOURCE: &str = "default";

const SEPARATOR: char = '\0';

/// Errors produced when decoding a client identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The value is not valid base64
    #[error("Invalid base64 in client identifier: {0}")]
    Base64(String),

    /// The decoded bytes are not valid UTF-8
    #[error("Client identifier is not valid UTF-8")]
    Utf8,

    /// The decoded value does not have exactly three parts
    #[error("Client identifier must have 3 parts, found {0}")]
    PartCount(usize),

    /// The type code is not recognised
    #[error("Unknown client identifier type: {0:?}")]
    UnknownType(String),
}

/// Type of object a client identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientIdentifierType {
    /// A connection
    Connection,
    /// A connection group
    ConnectionGroup,
    /// An active connection (a live session)
    ActiveConnection,
}

impl ClientIdentifierType {
    /// Returns the single-character code used in the encoded form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Connection => 'c',
            Self::ConnectionGroup => 'g',
            Self::ActiveConnection => 'a',
        }
    }

    /// Looks up a type by its code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "c" => Some(Self::Connection),
            "g" => Some(Self::ConnectionGroup),
            "a" => Some(Self::ActiveConnection),
            _ => None,
        }
    }
}

impl FromStr for ClientIdentifierType {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| IdentifierError::UnknownType(s.to_string()))
    }
}

/// Identifier of a connectable object, scoped by data source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentifier {
    /// Identifier of the object within its data source
    pub id: String,
    /// What kind of object `id` names
    pub kind: ClientIdentifierType,
    /// Data source the object belongs to
    pub data_source: String,
}

impl ClientIdentifier {
    /// Creates a new client identifier
    #[must_use]
    pub fn new(
        data_source: impl Into<String>,
        kind: ClientIdentifierType,
        id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            data_source: data_source.into(),
        }
    }

    /// Returns the encoded form of this identifier
    #[must_use]
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.id,
            self.kind.code(),
            self.data_source
        );
        STANDARD.encode(raw.as_bytes())
    }

    /// Decodes an encoded identifier
    ///
    /// # Errors
    ///
    /// Returns an `IdentifierError` if the value is not base64, not UTF-8,
    /// does not have three parts, or names an unknown type.
    pub fn decode(value: &str) -> Result<Self, IdentifierError> {
        let bytes = STANDARD
            .decode(value.trim())
            .map_err(|e| IdentifierError::Base64(e.to_string()))?;
        let raw = String::from_utf8(bytes).map_err(|_| IdentifierError::Utf8)?;

        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        let [id, code, data_source] = parts.as_slice() else {
            return Err(IdentifierError::PartCount(parts.len()));
        };

        Ok(Self {
            id: (*id).to_string(),
            kind: code.parse()?,
            data_source: (*data_source).to_string(),
        })
    }

    /// Decodes an identifier, falling back to a best guess for values that
    /// are not in the encoded format
    ///
    /// Undecodable values are treated as the raw identifier of a connection
    /// within the legacy `"default"` data source.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        Self::decode(value).unwrap_or_else(|_| Self {
            id: value.to_string(),
            kind: ClientIdentifierType::Connection,
            data_source: LEGACY_DATA_SOURCE.to_string(),
        })
    }
}

impl fmt::Display for ClientIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ClientIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
