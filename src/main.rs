mod cli;
mod command_handlers;
mod config;
mod error;
mod platform;
mod process;
mod profile;
mod prompt;
mod registry;
mod script;
mod versioning;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::command_handlers::Context;
use crate::prompt::TerminalPrompter;
use crate::versioning::{CratesIoCheck, NoUpdateCheck, UpdateCheck, NO_UPDATE_CHECK_ENV};

/// Log filter for diagnostics, e.g. `SCRIPTFLOW_LOG=debug`.
const LOG_ENV: &str = "SCRIPTFLOW_LOG";

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(platform::default_config_path);
    let prompter = TerminalPrompter::default();
    let updates: &dyn UpdateCheck = if std::env::var_os(NO_UPDATE_CHECK_ENV).is_some() {
        &NoUpdateCheck
    } else {
        &CratesIoCheck
    };
    let ctx = Context {
        config_path,
        cwd: std::env::current_dir()?,
        prompter: &prompter,
        updates,
    };
    command_handlers::dispatch::dispatch(cli.command, &ctx)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
