//! Server namespace array
//!
//! Maps namespace URIs to the indices a particular server assigns them.
//! Index 0 is always the base OPC UA namespace; companion models get
//! whatever index the server hands out, so qualified identifiers from the
//! tables must be resolved against a table like this one before they can be
//! written into a `NodeId`.

use std::collections::HashSet;

use tracing::warn;

use super::constants::{OPC_UA, OPC_UA_DI, OPC_UA_FDI5};
use super::node_id::{ExpandedNodeId, NodeId};
use crate::common::errors::NodeIdError;

/// Largest namespace array a `u16` index can address
pub const MAX_NAMESPACES: usize = u16::MAX as usize + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    uris: Vec<String>,
}

impl NamespaceTable {
    /// Table holding only the base namespace
    pub fn new() -> Self {
        Self {
            uris: vec![OPC_UA.to_string()],
        }
    }

    /// Base namespace followed by DI and FDI5, the usual layout of an FDI server
    pub fn with_model_namespaces() -> Self {
        Self {
            uris: vec![
                OPC_UA.to_string(),
                OPC_UA_DI.to_string(),
                OPC_UA_FDI5.to_string(),
            ],
        }
    }

    /// Adopt a namespace array read from a server or a config file
    pub fn from_uris(uris: Vec<String>) -> Result<Self, NodeIdError> {
        match uris.first() {
            Some(first) if first == OPC_UA => {}
            Some(first) => {
                return Err(NodeIdError::InvalidNamespaceTable(format!(
                    "index 0 must be '{}', got '{}'",
                    OPC_UA, first
                )))
            }
            None => {
                return Err(NodeIdError::InvalidNamespaceTable(
                    "namespace array is empty".to_string(),
                ))
            }
        }

        if uris.len() > MAX_NAMESPACES {
            return Err(NodeIdError::InvalidNamespaceTable(format!(
                "{} entries exceed the u16 index range",
                uris.len()
            )));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(uris.len());
        for uri in &uris {
            if !seen.insert(uri.as_str()) {
                return Err(NodeIdError::InvalidNamespaceTable(format!(
                    "'{}' appears more than once",
                    uri
                )));
            }
        }

        if !uris.iter().any(|uri| uri == OPC_UA_FDI5) {
            warn!(
                "Namespace table has no entry for {}; FDI5 identifiers will not resolve",
                OPC_UA_FDI5
            );
        }

        Ok(Self { uris })
    }

    /// Index of `uri`, inserting it at the end when missing
    ///
    /// Fails once the table already holds [`MAX_NAMESPACES`] entries.
    pub fn append(&mut self, uri: &str) -> Result<u16, NodeIdError> {
        if let Some(index) = self.index_of(uri) {
            return Ok(index);
        }
        let index = u16::try_from(self.uris.len()).map_err(|_| {
            NodeIdError::InvalidNamespaceTable(format!(
                "cannot add '{}': {} entries exceed the u16 index range",
                uri,
                self.uris.len() + 1
            ))
        })?;
        self.uris.push(uri.to_string());
        Ok(index)
    }

    pub fn index_of(&self, uri: &str) -> Option<u16> {
        self.uris
            .iter()
            .position(|known| known == uri)
            .and_then(|index| u16::try_from(index).ok())
    }

    pub fn uri_at(&self, index: u16) -> Option<&str> {
        self.uris.get(usize::from(index)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Always false: every constructor starts the table with the base namespace
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    /// Replace the namespace URI with this table's index
    pub fn to_node_id(&self, expanded: &ExpandedNodeId) -> Result<NodeId, NodeIdError> {
        let index = self
            .index_of(expanded.namespace_uri())
            .ok_or_else(|| NodeIdError::UnknownNamespace(expanded.namespace_uri().to_string()))?;
        Ok(NodeId::new(index, expanded.identifier))
    }

    /// Replace the namespace index with the URI it stands for
    pub fn to_expanded(&self, node_id: &NodeId) -> Result<ExpandedNodeId, NodeIdError> {
        let uri = self
            .uri_at(node_id.namespace_index)
            .ok_or(NodeIdError::NamespaceIndexOutOfRange {
                index: node_id.namespace_index,
                len: self.uris.len(),
            })?;
        Ok(ExpandedNodeId::with_uri(node_id.identifier, uri))
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}
