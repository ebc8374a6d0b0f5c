//! Error types for node identifier lookup and namespace resolution
//!
//! The tables themselves cannot fail. Errors only arise when callers turn
//! untrusted input (names, numbers, text forms, namespace arrays) into
//! identifiers, or when the registry self-check finds a structural defect.

use thiserror::Error;

/// Errors raised while resolving FDI5 node identifiers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    /// Symbolic name is not part of any table
    #[error("Unknown node name '{0}'")]
    UnknownName(String),

    /// Numeric identifier is not defined in the given category
    #[error("Unknown {category} identifier {value}")]
    UnknownIdentifier { category: &'static str, value: u32 },

    /// Qualified identifier belongs to a different namespace
    #[error("Namespace mismatch: expected '{expected}', got '{actual}'")]
    NamespaceMismatch { expected: String, actual: String },

    /// Namespace URI is not present in the namespace table
    #[error("Namespace '{0}' is not registered in the namespace table")]
    UnknownNamespace(String),

    /// Namespace index points past the end of the namespace table
    #[error("Namespace index {index} out of range (table has {len} entries)")]
    NamespaceIndexOutOfRange { index: u16, len: usize },

    /// Namespace array cannot serve as a server namespace table
    #[error("Invalid namespace table: {0}")]
    InvalidNamespaceTable(String),

    /// Text form of a node identifier could not be parsed
    #[error("Invalid node id format '{input}': {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    /// Two entries share one numeric identifier
    #[error("Duplicate identifier {value}: '{first}' and '{second}'")]
    DuplicateIdentifier {
        value: u32,
        first: &'static str,
        second: &'static str,
    },

    /// Two entries share one symbolic name
    #[error("Duplicate node name '{0}'")]
    DuplicateName(&'static str),

    /// Entry carries an empty browse name
    #[error("Node '{0}' has an empty browse name")]
    EmptyBrowseName(&'static str),
}

impl NodeIdError {
    pub fn invalid_format(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}
