pub mod create;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod init;
pub mod list;
pub mod reinit;
pub mod reset;
pub mod run;
pub mod show_config;
pub mod update;

use crate::config::Config;
use crate::profile::TerminalProfile;
use crate::prompt::Prompter;
use crate::versioning::UpdateCheck;
use anyhow::Result;
use std::path::PathBuf;

pub const NOT_INITIALIZED: &str =
    "Flow manager is not initialized. Please run \"flow init\" to initialize it.";
pub const FLOW_NOT_FOUND: &str = "Flow not found";

/// Everything a command needs from the outside world.
pub struct Context<'a> {
    pub config_path: PathBuf,
    /// Directory relative paths typed at prompts are resolved against.
    pub cwd: PathBuf,
    pub prompter: &'a dyn Prompter,
    pub updates: &'a dyn UpdateCheck,
}

impl Context<'_> {
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load_or_create(&self.config_path)?)
    }

    /// The config, or `None` after telling the user to run `flow init`.
    pub fn initialized_config(&self) -> Result<Option<Config>> {
        let cfg = self.load_config()?;
        if !cfg.initialized {
            println!("{NOT_INITIALIZED}");
            return Ok(None);
        }
        Ok(Some(cfg))
    }
}

/// The configured profile, or `None` after reporting an unknown value.
pub(crate) fn profile_or_report(cfg: &Config) -> Option<TerminalProfile> {
    match cfg.profile() {
        Ok(p) => Some(p),
        Err(e) => {
            println!("{e}");
            None
        }
    }
}
