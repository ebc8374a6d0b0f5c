//! FDI5 information model vocabulary
//!
//! Namespace URIs, identifier tables, BrowseNames and the helpers that turn
//! them into qualified identifiers a server or client can use.

pub mod browse_names;
pub mod constants;
pub mod ids;
pub mod namespace_table;
pub mod node_id;
pub mod registry;

pub use constants::{
    namespace_uri, MODEL_NAMESPACE, NAMESPACES, OPC_UA, OPC_UA_DI, OPC_UA_FDI5, OPC_UA_FDI5_XSD,
};
pub use ids::{
    DataTypeId, Encoding, MethodId, ObjectId, ObjectTypeId, VariableId, VariableTypeId,
};
pub use namespace_table::{NamespaceTable, MAX_NAMESPACES};
pub use node_id::{ExpandedNodeId, NodeId};
pub use registry::{NodeCategory, NodeEntry, RegistrySummary};
