//! # Node Registry - Flat Index Over Every Identifier Table
//!
//! ## Purpose
//!
//! The category enums are the compile-time API. The registry is the runtime
//! view: one read-only list of every node in the model with symbol, category,
//! local identifier and BrowseName, plus indexes for lookup by symbol and by
//! number. Tools, documentation generation and consumers that receive raw
//! identifiers from the wire go through here.
//!
//! ## Architecture Role
//!
//! ```text
//! ids::{DataTypeId, ...} → [Registry] → CLI / docs / address-space loaders
//!        ↑                     ↓
//!   compile-time         lookup / resolve / validate
//! ```
//!
//! Indexes are built on first use and never change afterwards, so any number
//! of threads may read them without coordination.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::constants::MODEL_NAMESPACE;
use super::ids::{DataTypeId, MethodId, ObjectId, ObjectTypeId, VariableId, VariableTypeId};
use super::node_id::ExpandedNodeId;
use crate::common::errors::NodeIdError;

/// Node class of an identifier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeCategory {
    DataType,
    Method,
    Object,
    ObjectType,
    Variable,
    VariableType,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 6] = [
        Self::DataType,
        Self::Method,
        Self::Object,
        Self::ObjectType,
        Self::Variable,
        Self::VariableType,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::DataType => "DataType",
            Self::Method => "Method",
            Self::Object => "Object",
            Self::ObjectType => "ObjectType",
            Self::Variable => "Variable",
            Self::VariableType => "VariableType",
        }
    }

    /// Kebab-case name used on the command line
    pub const fn slug(self) -> &'static str {
        match self {
            Self::DataType => "data-type",
            Self::Method => "method",
            Self::Object => "object",
            Self::ObjectType => "object-type",
            Self::Variable => "variable",
            Self::VariableType => "variable-type",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeCategory {
    type Err = NodeIdError;

    /// Accepts both `DataType` and `data-type`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s || category.slug() == s)
            .ok_or_else(|| NodeIdError::UnknownName(s.to_string()))
    }
}

/// One node of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeEntry {
    pub name: &'static str,
    pub category: NodeCategory,
    pub identifier: u32,
    pub browse_name: &'static str,
}

impl NodeEntry {
    pub const fn expanded(&self) -> ExpandedNodeId {
        ExpandedNodeId::new(self.identifier, MODEL_NAMESPACE)
    }
}

/// Counts reported by [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegistrySummary {
    pub total: usize,
    pub per_category: Vec<(NodeCategory, usize)>,
}

macro_rules! collect_entries {
    ($entries:ident, $($table:ty),+ $(,)?) => {
        $(
            $entries.extend(<$table>::ALL.iter().map(|id| NodeEntry {
                name: id.name(),
                category: <$table>::CATEGORY,
                identifier: id.value(),
                browse_name: id.browse_name(),
            }));
        )+
    };
}

static ENTRIES: Lazy<Vec<NodeEntry>> = Lazy::new(|| {
    let mut entries = Vec::new();
    collect_entries!(
        entries,
        DataTypeId,
        MethodId,
        ObjectId,
        ObjectTypeId,
        VariableId,
        VariableTypeId,
    );
    debug!("Built FDI5 node registry with {} entries", entries.len());
    entries
});

static BY_NAME: Lazy<HashMap<&'static str, &'static NodeEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.name, entry)).collect());

static BY_ID: Lazy<HashMap<u32, &'static NodeEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.identifier, entry)).collect());

/// Every node, grouped by category in `NodeCategory::ALL` order
pub fn entries() -> &'static [NodeEntry] {
    &ENTRIES
}

pub fn entries_in(category: NodeCategory) -> impl Iterator<Item = &'static NodeEntry> {
    ENTRIES.iter().filter(move |entry| entry.category == category)
}

/// Find a node by model compiler symbol
pub fn lookup(name: &str) -> Option<&'static NodeEntry> {
    BY_NAME.get(name).copied()
}

/// Find a node by local identifier
pub fn find_by_id(identifier: u32) -> Option<&'static NodeEntry> {
    BY_ID.get(&identifier).copied()
}

/// Find the node a qualified identifier refers to
pub fn resolve(expanded: &ExpandedNodeId) -> Result<&'static NodeEntry, NodeIdError> {
    if !expanded.is_in_namespace(MODEL_NAMESPACE) {
        return Err(NodeIdError::NamespaceMismatch {
            expected: MODEL_NAMESPACE.to_string(),
            actual: expanded.namespace_uri().to_string(),
        });
    }

    find_by_id(expanded.identifier).ok_or(NodeIdError::UnknownIdentifier {
        category: "node",
        value: expanded.identifier,
    })
}

/// Check the structural invariants of the tables
///
/// Identifiers must be unique across the namespace (and therefore within
/// each category), symbols must be unique, and no BrowseName may be empty.
pub fn validate() -> Result<RegistrySummary, NodeIdError> {
    let mut seen_ids: HashMap<u32, &'static str> = HashMap::new();
    let mut seen_names: HashSet<&'static str> = HashSet::new();

    for entry in ENTRIES.iter() {
        if let Some(first) = seen_ids.insert(entry.identifier, entry.name) {
            return Err(NodeIdError::DuplicateIdentifier {
                value: entry.identifier,
                first,
                second: entry.name,
            });
        }
        if !seen_names.insert(entry.name) {
            return Err(NodeIdError::DuplicateName(entry.name));
        }
        if entry.browse_name.is_empty() {
            return Err(NodeIdError::EmptyBrowseName(entry.name));
        }
    }

    let summary = RegistrySummary {
        total: ENTRIES.len(),
        per_category: NodeCategory::ALL
            .iter()
            .map(|category| (*category, entries_in(*category).count()))
            .collect(),
    };
    info!(total = summary.total, "FDI5 node registry validated");
    Ok(summary)
}

/// Generate the markdown reference of every table
///
/// Keeps published documentation in step with the tables; regenerate it
/// with `fdi5-nodeids docs` after changing the model.
pub fn generate_markdown_table() -> String {
    let mut output = String::new();

    output.push_str("# OPC UA FDI5 - Node Identifier Reference\n\n");
    output.push_str("**This file is generated from `libs/types/src/model/ids` - DO NOT EDIT MANUALLY**\n\n");
    output.push_str(&format!("Namespace: `{}`\n\n", MODEL_NAMESPACE));

    output.push_str("## Overview\n\n");
    output.push_str(&format!("- **Total Nodes**: {}\n", ENTRIES.len()));
    for category in NodeCategory::ALL {
        output.push_str(&format!(
            "- **{}**: {}\n",
            category,
            entries_in(category).count()
        ));
    }
    output.push('\n');

    for category in NodeCategory::ALL {
        output.push_str(&format!("## {}s\n\n", category));
        output.push_str("| Symbol | Id | BrowseName | ExpandedNodeId |\n");
        output.push_str("|--------|----|------------|----------------|\n");
        for entry in entries_in(category) {
            output.push_str(&format!(
                "| `{}` | {} | {} | `{}` |\n",
                entry.name,
                entry.identifier,
                entry.browse_name,
                entry.expanded()
            ));
        }
        output.push('\n');
    }

    output
}
