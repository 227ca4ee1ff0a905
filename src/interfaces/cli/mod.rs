//! CLI interface module
//!
//! Each command loads the flow through the configured repository, runs one
//! store operation and saves the result back.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::flow::{FlowStore, NodeId};
use crate::repository::FlowRepository;
use commands::{
    add_node, attach_media, config_generate, delete_node, duplicate_node, list_nodes, node_stats,
    show_node, tag_node,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::FlowError> for CliError {
    fn from(err: crate::errors::FlowError) -> Self {
        use crate::errors::FlowError;
        match err {
            FlowError::Validation(msg) => CliError::ParseError(msg),
            FlowError::NotFound(msg) | FlowError::Upload(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Load the flow into a store configured from `config`
pub fn open_store(
    repository: &dyn FlowRepository,
    config: &StaticConfig,
) -> Result<FlowStore, CliError> {
    let flow = repository
        .load()
        .map_err(|e| CliError::StorageError(format!("Failed to load flow: {}", e)))?;
    Ok(FlowStore::new(flow, config.store_options()))
}

/// Resolve user input to a node id: exact match first, then a unique prefix
pub fn resolve_node_id(store: &FlowStore, input: &str) -> Result<NodeId, CliError> {
    let input = input.trim();
    if let Some(node) = store.nodes().iter().find(|n| n.id.as_str() == input) {
        return Ok(node.id.clone());
    }
    if input.is_empty() {
        return Err(CliError::ParseError("Node id must not be empty".to_string()));
    }

    let mut matches = store
        .nodes()
        .iter()
        .filter(|n| n.id.as_str().starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(node), None) => Ok(node.id.clone()),
        (Some(_), Some(_)) => Err(CliError::ParseError(format!(
            "Node id prefix '{}' is ambiguous",
            input
        ))),
        (None, _) => Err(CliError::CommandError(format!(
            "Node '{}' not found",
            input
        ))),
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(
    cmd: Commands,
    config: &StaticConfig,
    repository: &dyn FlowRepository,
) -> Result<(), CliError> {
    match cmd {
        Commands::List { search } => list_nodes(repository, config, search.as_deref()),
        Commands::Show { id } => show_node(repository, config, &id),
        Commands::Add { kind } => add_node(repository, config, kind),
        Commands::Duplicate { id } => duplicate_node(repository, config, &id),
        Commands::Delete { id } => delete_node(repository, config, &id),
        Commands::Tag { id, label } => tag_node(repository, config, &id, &label),
        Commands::Attach { id, file } => attach_media(repository, config, &id, &file),
        Commands::Stats { id } => node_stats(repository, config, &id),
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
        },
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "The editor is started from main, not as a CLI command".to_string(),
        )),
    }
}
