//! # FDI5 Tool Configuration
//!
//! Loads the settings of the node identifier tools: the server namespace
//! array used to turn qualified identifiers into namespace indices, logging
//! level and output preferences.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fdi5_config::NodeIdsConfig;
//!
//! let config = NodeIdsConfig::load(None).unwrap();
//! let table = config.namespace_table().unwrap();
//! println!("FDI5 namespace index: {:?}", table.index_of(fdi5_types::model::OPC_UA_FDI5));
//! ```

pub mod nodeids_config;

// Re-export commonly used types
pub use nodeids_config::{load_config, NodeIdsConfig, OutputFormat, ENV_PREFIX};
