//! Numeric node identifiers in local and namespace-qualified form
//!
//! `NodeId` is what a server puts on the wire: a namespace *index* into its
//! namespace array plus the numeric identifier. `ExpandedNodeId` replaces the
//! index with the namespace URI so the identifier means the same thing in
//! every address space. The identifier tables hand out `ExpandedNodeId`s;
//! [`NamespaceTable`](super::namespace_table::NamespaceTable) converts between
//! the two.
//!
//! Text forms follow the OPC UA string notation:
//!
//! ```text
//! i=3004                                          NodeId, namespace 0
//! ns=2;i=3004                                     NodeId, namespace 2
//! nsu=http://fdi-cooperation.com/OPCUA/FDI5/;i=3004  ExpandedNodeId
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::common::errors::NodeIdError;

/// Numeric identifier qualified by its namespace URI
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandedNodeId {
    pub identifier: u32,
    pub namespace_uri: Cow<'static, str>,
}

impl ExpandedNodeId {
    /// Build a qualified identifier over a static namespace URI
    pub const fn new(identifier: u32, namespace_uri: &'static str) -> Self {
        Self {
            identifier,
            namespace_uri: Cow::Borrowed(namespace_uri),
        }
    }

    /// Build a qualified identifier from a runtime namespace URI
    pub fn with_uri(identifier: u32, namespace_uri: impl Into<String>) -> Self {
        Self {
            identifier,
            namespace_uri: Cow::Owned(namespace_uri.into()),
        }
    }

    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    pub fn is_in_namespace(&self, uri: &str) -> bool {
        self.namespace_uri == uri
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nsu={};i={}", self.namespace_uri, self.identifier)
    }
}

impl FromStr for ExpandedNodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("nsu=")
            .ok_or_else(|| NodeIdError::invalid_format(s, "expected 'nsu=' prefix"))?;
        // URIs may contain ';', the identifier part is always the last segment
        let (uri, identifier) = rest
            .rsplit_once(";i=")
            .ok_or_else(|| NodeIdError::invalid_format(s, "expected ';i=<number>' suffix"))?;
        if uri.is_empty() {
            return Err(NodeIdError::invalid_format(s, "empty namespace URI"));
        }
        let identifier = parse_identifier(s, identifier)?;
        Ok(Self::with_uri(identifier, uri))
    }
}

/// Numeric identifier qualified by a namespace index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    pub namespace_index: u16,
    pub identifier: u32,
}

impl NodeId {
    pub const fn new(namespace_index: u16, identifier: u32) -> Self {
        Self {
            namespace_index,
            identifier,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index == 0 {
            write!(f, "i={}", self.identifier)
        } else {
            write!(f, "ns={};i={}", self.namespace_index, self.identifier)
        }
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(identifier) = s.strip_prefix("i=") {
            return Ok(Self::new(0, parse_identifier(s, identifier)?));
        }

        let rest = s
            .strip_prefix("ns=")
            .ok_or_else(|| NodeIdError::invalid_format(s, "expected 'ns=' or 'i=' prefix"))?;
        let (index, identifier) = rest
            .split_once(";i=")
            .ok_or_else(|| NodeIdError::invalid_format(s, "expected ';i=<number>' suffix"))?;
        let namespace_index = index
            .parse::<u16>()
            .map_err(|_| NodeIdError::invalid_format(s, "namespace index is not a u16"))?;

        Ok(Self::new(namespace_index, parse_identifier(s, identifier)?))
    }
}

fn parse_identifier(input: &str, identifier: &str) -> Result<u32, NodeIdError> {
    identifier
        .parse::<u32>()
        .map_err(|_| NodeIdError::invalid_format(input, "identifier is not a u32"))
}
