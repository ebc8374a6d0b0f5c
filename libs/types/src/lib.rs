//! # FDI5 Node Identifier Tables
//!
//! Well-known node identifiers of the OPC UA FDI5 (Field Device Integration)
//! companion information model, for stacks that reference these nodes by
//! name instead of by raw integer.
//!
//! ## Contents
//!
//! - **Identifier tables**: one enum per node category ([`DataTypeId`],
//!   [`MethodId`], [`ObjectId`], [`ObjectTypeId`], [`VariableId`],
//!   [`VariableTypeId`]); `as u32` gives the local identifier,
//!   `expanded()` the namespace-qualified one
//! - **BrowseNames**: [`model::browse_names`]
//! - **Namespaces**: [`model::constants`]
//! - **Registry**: runtime lookup by symbol or number, self-check, docs
//!   generation ([`model::registry`])
//! - **Namespace resolution**: [`NamespaceTable`] maps qualified identifiers
//!   to a server's namespace indices
//!
//! ## Quick Start
//!
//! ```rust
//! use fdi5_types::{DataTypeId, MethodId, NamespaceTable, NodeId};
//!
//! assert_eq!(DataTypeId::ApplyResult as u32, 3004);
//!
//! let apply = MethodId::Apply.expanded();
//! assert_eq!(apply.to_string(), "nsu=http://fdi-cooperation.com/OPCUA/FDI5/;i=7009");
//!
//! let table = NamespaceTable::with_model_namespaces();
//! assert_eq!(table.to_node_id(&apply).unwrap(), NodeId::new(2, 7009));
//! ```
//!
//! Everything here is immutable data; concurrent readers need no locking.
//!
//! ## Identifier Values
//!
//! The numbers follow the model compiler block layout (ObjectTypes 1xxx,
//! DataTypes 3xxx, Methods 7xxx, ...) and are provisional: they have not
//! been checked against the published `Opc.Ua.Fdi5.NodeSet2.xml`, so do not
//! rely on them to address nodes on a production FDI server.

pub mod common;
pub mod model;

pub use common::errors::NodeIdError;
pub use model::registry;
pub use model::{
    DataTypeId, Encoding, ExpandedNodeId, MethodId, NamespaceTable, NodeCategory, NodeEntry,
    NodeId, ObjectId, ObjectTypeId, VariableId, VariableTypeId,
};

pub type Result<T> = std::result::Result<T, NodeIdError>;
