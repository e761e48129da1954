//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect how the agent bridge resolves configuration for a host
#[derive(Parser, Debug)]
#[command(name = "bridge-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ClientInfo payload (JSON file)
    #[arg(long, global = true, env = "BRIDGE_CLIENT_INFO")]
    pub client_info: Option<PathBuf>,

    /// ExtensionConfiguration payload (JSON file)
    #[arg(long, global = true, env = "BRIDGE_EXTENSION_CONFIG")]
    pub extension_config: Option<PathBuf>,

    /// Override a value before resolving, as PATH=VALUE
    ///
    /// VALUE is parsed as JSON and taken as a plain string if that fails.
    /// May be repeated; later overrides win. Must come before the command.
    ///
    /// Examples:
    ///   --set cody.codebase=github.com/example/repo
    ///   --set 'editor.tabSize=4'
    ///   --set 'cody.debug={"verbose":false}'
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub overrides: Vec<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value resolved at a dotted path
    Get {
        /// Dotted path, e.g. cody.serverEndpoint
        path: String,

        /// Value to print when nothing resolves (JSON, or a plain string)
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Report whether a dotted path resolves to a value
    Has {
        /// Dotted path, e.g. cody.autocomplete.advanced
        path: String,
    },

    /// Print the whole resolved configuration tree
    Dump,
}
