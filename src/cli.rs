//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for chatflow using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::flow::NodeKind;

/// chatflow - Terminal editor for chatbot conversation flows
#[derive(Parser, Debug)]
#[command(name = "chatflow")]
#[command(version)]
#[command(about = "Terminal editor for chatbot conversation flows", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Flow file, overrides storage.flow_file
    #[arg(long, short = 'f', global = true)]
    pub flow: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive editor (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List nodes in flow order
    List {
        /// Only show nodes whose message or tags contain this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one node with its preview
    Show {
        /// Node id (a unique prefix is enough)
        id: String,
    },

    /// Append a new node
    Add {
        /// text, image, video, audio, file or carousel
        #[arg(long, short = 'k', default_value = "text")]
        kind: NodeKind,
    },

    /// Duplicate a node
    Duplicate { id: String },

    /// Delete a node (the last remaining node is kept)
    Delete { id: String },

    /// Add a tag to a node
    Tag { id: String, label: String },

    /// Attach a local media file to an image, video or audio node
    Attach { id: String, file: PathBuf },

    /// Show analytics for a node
    Stats { id: String },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_kind() {
        let cli = Cli::try_parse_from(["chatflow", "add", "--kind", "image"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add {
                kind: NodeKind::Image
            })
        ));
    }

    #[test]
    fn test_global_flow_option() {
        let cli = Cli::try_parse_from(["chatflow", "list", "-f", "bot.json"]).unwrap();
        assert_eq!(cli.flow, Some(PathBuf::from("bot.json")));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["chatflow"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["chatflow", "add", "--kind", "gif"]).is_err());
    }
}
