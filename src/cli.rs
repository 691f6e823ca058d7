use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "flow",
    about = "ScriptFlow: save shell command sequences as named flows and run them from anywhere",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.json (defaults to the per-user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize the flow manager (terminal profile + storage location)
    Init,
    /// Create a new flow
    Create,
    /// List all flows
    List,
    /// Run a flow by name
    Run {
        #[arg(value_name = "FLOW_NAME")]
        name: String,
    },
    /// Delete a flow by name
    Delete {
        #[arg(value_name = "FLOW_NAME")]
        name: String,
    },
    /// Reinitialize the flow manager, moving or deleting existing flows
    Reinit,
    /// Open a flow for editing
    Edit {
        #[arg(value_name = "FLOW_NAME")]
        name: String,
    },
    /// Reset the flow manager config
    Default,
    /// View the flow manager config
    Config,
    /// Update the flow manager and migrate existing flow scripts
    Update,
}

impl Commands {
    /// Whether the crates.io release check runs before this command.
    pub fn checks_for_updates(&self) -> bool {
        !matches!(self, Commands::Default | Commands::Config | Commands::Update)
    }
}
