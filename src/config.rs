use crate::error::StoreError;
use crate::platform;
use crate::profile::{InvalidProfile, TerminalProfile};
use crate::registry::COMMANDS_DIR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Installation-wide settings, persisted as config.json.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub flow_dir: PathBuf,
    pub flow_command_dir: PathBuf,
    /// Kept as text so a hand-edited value surfaces as an invalid profile at use time.
    pub terminal_profile: String,
    pub initialized: bool,
    #[serde(default = "default_flow_path")]
    pub default_flow_path: String,
}

fn default_flow_path() -> String {
    ".".to_string()
}

impl Config {
    pub fn defaults() -> Self {
        let mut cfg = Config {
            flow_dir: PathBuf::new(),
            flow_command_dir: PathBuf::new(),
            terminal_profile: TerminalProfile::Bash.to_string(),
            initialized: false,
            default_flow_path: default_flow_path(),
        };
        cfg.set_flow_dir(platform::default_flow_dir());
        cfg
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Load the config, writing the defaults first if this is the first run.
    pub fn load_or_create(path: &Path) -> Result<Self, StoreError> {
        match Self::load(path) {
            Err(e) if e.is_not_found() => {
                let cfg = Self::defaults();
                cfg.save(path)?;
                debug!(path = %path.display(), "created default config");
                Ok(cfg)
            }
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Serialize {
            what: "config",
            source,
        })?;
        fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Overwrite `path` with the defaults and return them.
    pub fn reset(path: &Path) -> Result<Self, StoreError> {
        let cfg = Self::defaults();
        cfg.save(path)?;
        Ok(cfg)
    }

    pub fn set_flow_dir(&mut self, dir: PathBuf) {
        self.flow_command_dir = dir.join(COMMANDS_DIR);
        self.flow_dir = dir;
    }

    pub fn profile(&self) -> Result<TerminalProfile, InvalidProfile> {
        self.terminal_profile.parse()
    }
}
