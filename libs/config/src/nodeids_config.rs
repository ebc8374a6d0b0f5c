//! Node Identifier Tool Configuration
//!
//! Provides configuration loading for the FDI5 node identifier tools.
//! Supports an optional TOML file with `FDI5__*` environment overrides.

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use fdi5_types::{NamespaceTable, NodeIdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable prefix, e.g. `FDI5__LOG_LEVEL=debug`
pub const ENV_PREFIX: &str = "FDI5";

/// Rendering of command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

/// Settings shared by the node identifier tools
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct NodeIdsConfig {
    /// Server namespace array; empty means base, DI, FDI5 in that order
    pub namespace_array: Vec<String>,

    pub log_level: String,

    pub output: OutputFormat,

    /// Default destination of the generated markdown reference
    pub docs_output: Option<PathBuf>,
}

impl Default for NodeIdsConfig {
    fn default() -> Self {
        Self {
            namespace_array: Vec::new(),
            log_level: "info".to_string(),
            output: OutputFormat::Text,
            docs_output: None,
        }
    }
}

impl NodeIdsConfig {
    /// Load configuration from an optional file with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading configuration: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        // Override with environment variables (FDI5__ prefix)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("namespace_array")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        let mut loaded: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        loaded.expand_env_vars()?;

        debug!(
            namespaces = loaded.namespace_array.len(),
            output = %loaded.output,
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Namespace table described by `namespace_array`
    pub fn namespace_table(&self) -> Result<NamespaceTable, NodeIdError> {
        if self.namespace_array.is_empty() {
            return Ok(NamespaceTable::with_model_namespaces());
        }
        NamespaceTable::from_uris(self.namespace_array.clone())
    }

    /// Expand environment variables in path values
    pub fn expand_env_vars(&mut self) -> Result<()> {
        if let Some(docs_output) = &self.docs_output {
            let raw = docs_output.to_string_lossy();
            let expanded = shellexpand::env(&raw).context("Failed to expand docs output path")?;
            self.docs_output = Some(PathBuf::from(expanded.into_owned()));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Convenience function to load configuration with defaults
pub fn load_config(path: Option<&Path>) -> Result<NodeIdsConfig> {
    NodeIdsConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdi5_types::model::{OPC_UA, OPC_UA_FDI5};
    use std::env;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Process environment is shared by every test thread
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `f` with only `vars` set among the `FDI5` variables
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let inherited: Vec<(String, String)> = env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        for (key, _) in &inherited {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }

        let result = f();

        for (key, _) in vars {
            env::remove_var(key);
        }
        for (key, value) in &inherited {
            env::set_var(key, value);
        }
        result
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = with_env(&[], || NodeIdsConfig::load(None)).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output, OutputFormat::Text);

        let table = config.namespace_table().unwrap();
        assert_eq!(table.index_of(OPC_UA_FDI5), Some(2));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nodeids.toml");

        let config_content = r#"
log_level = "debug"
output = "json"
namespace_array = [
    "http://opcfoundation.org/UA/",
    "urn:vendor:fdi-server",
    "http://opcfoundation.org/UA/DI/",
    "http://fdi-cooperation.com/OPCUA/FDI5/",
]
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = with_env(&[], || NodeIdsConfig::load(Some(config_path.as_path()))).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);

        let table = config.namespace_table().unwrap();
        assert_eq!(table.index_of(OPC_UA), Some(0));
        assert_eq!(table.index_of(OPC_UA_FDI5), Some(3));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(with_env(&[], || NodeIdsConfig::load(Some(missing.as_path()))).is_err());
    }

    #[test]
    fn test_environment_overrides() {
        let namespaces = format!("{},urn:vendor:fdi-server,{}", OPC_UA, OPC_UA_FDI5);
        let config = with_env(
            &[
                ("FDI5__NAMESPACE_ARRAY", namespaces.as_str()),
                ("FDI5__LOG_LEVEL", "debug"),
                ("FDI5__OUTPUT", "json"),
            ],
            || NodeIdsConfig::load(None),
        )
        .unwrap();

        assert_eq!(
            config.namespace_array,
            vec![OPC_UA, "urn:vendor:fdi-server", OPC_UA_FDI5]
        );
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.namespace_table().unwrap().index_of(OPC_UA_FDI5), Some(2));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nodeids.toml");
        fs::write(&config_path, "log_level = \"warn\"\noutput = \"json\"\n").unwrap();

        let config = with_env(&[("FDI5__LOG_LEVEL", "trace")], || {
            NodeIdsConfig::load(Some(config_path.as_path()))
        })
        .unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_docs_output_is_expanded() {
        let config = with_env(
            &[
                ("FDI5_DOCS_ROOT", "/srv/fdi5"),
                ("FDI5__DOCS_OUTPUT", "$FDI5_DOCS_ROOT/nodeids.md"),
            ],
            || NodeIdsConfig::load(None),
        )
        .unwrap();
        assert_eq!(config.docs_output, Some(PathBuf::from("/srv/fdi5/nodeids.md")));

        let unresolved = with_env(&[("FDI5__DOCS_OUTPUT", "$FDI5_UNSET_ROOT/nodeids.md")], || {
            NodeIdsConfig::load(None)
        });
        assert!(unresolved.is_err());
    }

    #[test]
    fn test_invalid_namespace_array() {
        let config = NodeIdsConfig {
            namespace_array: vec![OPC_UA_FDI5.to_string()],
            ..NodeIdsConfig::default()
        };
        assert!(config.namespace_table().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = NodeIdsConfig {
            output: OutputFormat::Json,
            docs_output: Some(PathBuf::from("docs/fdi5-nodeids.md")),
            ..NodeIdsConfig::default()
        };
        let rendered = config.to_toml().unwrap();
        let parsed: NodeIdsConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
