//! fdi5-nodeids - query the OPC UA FDI5 node identifier tables
//!
//! ```text
//! fdi5-nodeids list --category method
//! fdi5-nodeids lookup ApplyResult
//! fdi5-nodeids resolve ns=2;i=7009
//! fdi5-nodeids docs --output docs/fdi5-nodeids.md
//! fdi5-nodeids check
//! ```
//!
//! Namespace indices come from the configured namespace array
//! (`--config`, `FDI5__NAMESPACE_ARRAY`), defaulting to base, DI, FDI5.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use fdi5_config::{NodeIdsConfig, OutputFormat};
use fdi5_types::model::{browse_names, MODEL_NAMESPACE, NAMESPACES};
use fdi5_types::{registry, ExpandedNodeId, NamespaceTable, NodeCategory, NodeEntry, NodeId};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fdi5-nodeids")]
#[command(about = "Look up, resolve and document OPC UA FDI5 node identifiers")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List identifiers, optionally for one category
    List {
        /// data-type, method, object, object-type, variable or variable-type
        #[arg(long)]
        category: Option<NodeCategory>,
    },
    /// Show one identifier by model compiler symbol
    Lookup {
        /// Symbol such as ApplyResult or Apply_InputArguments
        name: String,
    },
    /// Find the node behind a number, `ns=<k>;i=<n>` or `nsu=<uri>;i=<n>`
    Resolve { id: String },
    /// Show the model namespaces and their configured indices
    Namespaces,
    /// List the BrowseNames the model defines
    BrowseNames,
    /// Generate the markdown identifier reference
    Docs {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the identifier tables
    Check,
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = NodeIdsConfig::load(cli.config.as_deref())?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(log_level)?;

    let format = cli.format.unwrap_or(config.output);
    execute(cli.command, &config, format)
}

fn execute(command: Commands, config: &NodeIdsConfig, format: OutputFormat) -> Result<ExitCode> {
    debug!(?format, ?command, "Running command");

    match command {
        Commands::List { category } => {
            let table = config.namespace_table()?;
            let entries: Vec<&NodeEntry> = match category {
                Some(category) => registry::entries_in(category).collect(),
                None => registry::entries().iter().collect(),
            };
            print!("{}", render_entries(&entries, &table, format)?);
        }
        Commands::Lookup { name } => {
            let table = config.namespace_table()?;
            let entry = registry::lookup(&name)
                .with_context(|| format!("No FDI5 node named '{}'", name))?;
            print!("{}", render_entries(&[entry], &table, format)?);
        }
        Commands::Resolve { id } => {
            let table = config.namespace_table()?;
            let entry = resolve_input(&id, &table)?;
            print!("{}", render_entries(&[entry], &table, format)?);
        }
        Commands::Namespaces => {
            let table = config.namespace_table()?;
            print!("{}", render_namespaces(&table, format)?);
        }
        Commands::BrowseNames => {
            print!("{}", render_browse_names(format)?);
        }
        Commands::Docs { output } => {
            let markdown = registry::generate_markdown_table();
            match output.or_else(|| config.docs_output.clone()) {
                Some(path) => {
                    fs::write(&path, markdown)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote identifier reference to {}", path.display());
                }
                None => print!("{}", markdown),
            }
        }
        Commands::Check => return check(config, format),
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_lowercase()))
        .with_context(|| format!("Invalid log level '{}'", level))?;

    // stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialise logging: {}", err))
}

/// Accepts a bare number, `i=<n>`, `ns=<k>;i=<n>` or `nsu=<uri>;i=<n>`
fn resolve_input(input: &str, table: &NamespaceTable) -> Result<&'static NodeEntry> {
    let input = input.trim();

    let expanded = if input.starts_with("nsu=") {
        input.parse::<ExpandedNodeId>()?
    } else if input.starts_with("ns=") || input.starts_with("i=") {
        let node_id: NodeId = input.parse()?;
        table.to_expanded(&node_id)?
    } else {
        let identifier: u32 = input
            .parse()
            .with_context(|| format!("'{}' is not a node identifier", input))?;
        return registry::find_by_id(identifier)
            .with_context(|| format!("No FDI5 node with identifier {}", identifier));
    };

    Ok(registry::resolve(&expanded)?)
}

fn check(config: &NodeIdsConfig, format: OutputFormat) -> Result<ExitCode> {
    let summary = match registry::validate() {
        Ok(summary) => summary,
        Err(err) => {
            error!("Identifier tables are inconsistent: {}", err);
            eprintln!("FAILED: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let table = config.namespace_table()?;
    let model_index = table.index_of(MODEL_NAMESPACE);
    if model_index.is_none() {
        warn!("Configured namespace array does not contain {}", MODEL_NAMESPACE);
    }

    match format {
        OutputFormat::Json => {
            let per_category: serde_json::Map<String, Value> = summary
                .per_category
                .iter()
                .map(|(category, count)| (category.name().to_string(), json!(count)))
                .collect();
            let report = json!({
                "status": "ok",
                "total": summary.total,
                "per_category": per_category,
                "model_namespace_index": model_index,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("OK: {} identifiers", summary.total);
            for (category, count) in &summary.per_category {
                println!("  {:<14} {}", category.name(), count);
            }
            match model_index {
                Some(index) => println!("  namespace index {}", index),
                None => println!("  namespace not in configured table"),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn node_id_text(entry: &NodeEntry, table: &NamespaceTable) -> Option<String> {
    table
        .to_node_id(&entry.expanded())
        .ok()
        .map(|node_id| node_id.to_string())
}

fn render_entries(
    entries: &[&NodeEntry],
    table: &NamespaceTable,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<Value> = entries
                .iter()
                .map(|entry| {
                    json!({
                        "name": entry.name,
                        "category": entry.category.name(),
                        "identifier": entry.identifier,
                        "browse_name": entry.browse_name,
                        "expanded_node_id": entry.expanded().to_string(),
                        "node_id": node_id_text(entry, table),
                    })
                })
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in entries {
                writeln!(
                    out,
                    "{:<13} {:>6}  {:<14} {:<58} {}",
                    entry.category.name(),
                    entry.identifier,
                    node_id_text(entry, table).unwrap_or_else(|| "-".to_string()),
                    entry.name,
                    entry.browse_name
                )?;
            }
            Ok(out)
        }
    }
}

fn render_namespaces(table: &NamespaceTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<Value> = NAMESPACES
                .iter()
                .map(|(symbol, uri)| {
                    json!({
                        "symbol": symbol,
                        "uri": uri,
                        "index": table.index_of(uri),
                    })
                })
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (symbol, uri) in NAMESPACES.iter() {
                let index = table
                    .index_of(uri)
                    .map(|index| index.to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(out, "{:>3}  {:<16} {}", index, symbol, uri)?;
            }
            Ok(out)
        }
    }
}

fn render_browse_names(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, Value> = browse_names::ALL
                .iter()
                .map(|(constant, value)| (constant.to_string(), json!(value)))
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&map)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (constant, value) in browse_names::ALL {
                writeln!(out, "{:<32} {}", constant, value)?;
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdi5_types::{DataTypeId, MethodId};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["fdi5-nodeids", "list", "--category", "data-type"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                category: Some(NodeCategory::DataType)
            }
        ));

        let cli = Cli::try_parse_from(["fdi5-nodeids", "lookup", "Apply", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Lookup { ref name } if name == "Apply"));

        let cli = Cli::try_parse_from(["fdi5-nodeids", "browse-names"]).unwrap();
        assert!(matches!(cli.command, Commands::BrowseNames));
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["fdi5-nodeids", "list", "--category", "reference-type"]).is_err());
        assert!(Cli::try_parse_from(["fdi5-nodeids", "check", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_resolve_input_forms() {
        let table = NamespaceTable::with_model_namespaces();

        assert_eq!(resolve_input("7009", &table).unwrap().name, "Apply");
        assert_eq!(resolve_input("ns=2;i=3004", &table).unwrap().name, "ApplyResult");
        assert_eq!(
            resolve_input(&DataTypeId::StyleType.expanded().to_string(), &table)
                .unwrap()
                .name,
            "StyleType"
        );
    }

    #[test]
    fn test_resolve_input_errors() {
        let table = NamespaceTable::with_model_namespaces();

        // namespace 1 is DI
        assert!(resolve_input("ns=1;i=3004", &table).is_err());
        assert!(resolve_input("ns=9;i=3004", &table).is_err());
        assert!(resolve_input("i=3004", &table).is_err());
        assert!(resolve_input("4242", &table).is_err());
        assert!(resolve_input("ApplyResult", &table).is_err());
    }

    #[test]
    fn test_render_entries_text_and_json() {
        let table = NamespaceTable::with_model_namespaces();
        let entry = registry::lookup(MethodId::Apply.name()).unwrap();

        let text = render_entries(&[entry], &table, OutputFormat::Text).unwrap();
        assert!(text.contains("ns=2;i=7009"));
        assert!(text.contains("Apply"));

        let json = render_entries(&[entry], &table, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["identifier"], json!(7009));
        assert_eq!(parsed[0]["category"], json!("Method"));
        assert_eq!(parsed[0]["node_id"], json!("ns=2;i=7009"));
    }

    #[test]
    fn test_render_entries_without_model_namespace() {
        let table = NamespaceTable::new();
        let entry = registry::lookup("ApplyResult").unwrap();
        let json = render_entries(&[entry], &table, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["node_id"], Value::Null);
    }

    #[test]
    fn test_render_namespaces() {
        let table = NamespaceTable::with_model_namespaces();
        let text = render_namespaces(&table, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), NAMESPACES.len());
        assert!(text.contains("OPC_UA_FDI5_XSD"));

        let json = render_namespaces(&table, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["symbol"], json!("OPC_UA_FDI5"));
        assert_eq!(parsed[0]["index"], json!(2));
        // the XSD namespace is never in a server namespace array by default
        assert_eq!(parsed[1]["index"], Value::Null);
    }

    #[test]
    fn test_render_browse_names() {
        let text = render_browse_names(OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), browse_names::ALL.len());

        let json = render_browse_names(OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["INVOKE_ACTION"], json!("InvokeAction"));
    }

    #[test]
    fn test_docs_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodeids.md");

        let cli = Cli::try_parse_from([
            "fdi5-nodeids",
            "docs",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();
        execute(cli.command, &NodeIdsConfig::default(), OutputFormat::Text).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# OPC UA FDI5 - Node Identifier Reference"));
        assert!(written.contains("`RegistrationParameters_Encoding_DefaultBinary`"));
    }
}
