use crate::error::StoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FLOWS_FILE: &str = "flows.json";

/// Directory under the flow directory that holds per-flow script folders.
pub const COMMANDS_DIR: &str = "commands";

static FLOW_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

pub fn is_valid_flow_name(name: &str) -> bool {
    FLOW_NAME.is_match(name)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Flow {
    pub name: String,
    /// Working directory the script runs in.
    pub path: PathBuf,
    pub script: PathBuf,
}

/// The ordered set of flows stored under one flow directory.
#[derive(Debug)]
pub struct FlowRegistry {
    file: PathBuf,
    flows: Vec<Flow>,
}

impl FlowRegistry {
    /// Read `<flow_dir>/flows.json`. A missing file is an empty registry.
    pub fn load(flow_dir: &Path) -> Result<Self, StoreError> {
        let file = flow_dir.join(FLOWS_FILE);
        let flows = match fs::read_to_string(&file) {
            Ok(data) => serde_json::from_str(&data).map_err(|source| StoreError::Parse {
                path: file.clone(),
                source,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Read { path: file, source }),
        };
        debug!(file = %file.display(), count = flows.len(), "loaded flows");
        Ok(FlowRegistry { file, flows })
    }

    pub fn list(&self) -> &[Flow] {
        &self.flows
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Flow> {
        self.flows.iter().find(|f| f.name == name)
    }

    pub fn add(&mut self, flow: Flow) -> Result<(), StoreError> {
        if self.find(&flow.name).is_some() {
            return Err(StoreError::DuplicateFlow(flow.name));
        }
        self.flows.push(flow);
        self.save()
    }

    /// Delete the flow's script, then drop the record. `Ok(None)` when no
    /// flow has that name. If the script cannot be removed the record stays.
    pub fn remove(&mut self, name: &str) -> Result<Option<Flow>, StoreError> {
        let Some(idx) = self.flows.iter().position(|f| f.name == name) else {
            return Ok(None);
        };
        let script = &self.flows[idx].script;
        match fs::remove_file(script) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(script = %script.display(), "script already gone");
            }
            Err(source) => {
                return Err(StoreError::RemoveScript {
                    path: script.clone(),
                    source,
                })
            }
        }
        if let Some(dir) = script.parent() {
            let commands = self.commands_dir();
            if dir.starts_with(&commands) && dir != commands {
                // only succeeds when the per-flow directory is now empty
                let _ = fs::remove_dir(dir);
            }
        }
        let flow = self.flows.remove(idx);
        self.save()?;
        Ok(Some(flow))
    }

    /// Point a flow at a new script file and persist. Returns false for an
    /// unknown name.
    pub fn set_script(&mut self, name: &str, script: PathBuf) -> Result<bool, StoreError> {
        let Some(flow) = self.flows.iter_mut().find(|f| f.name == name) else {
            return Ok(false);
        };
        flow.script = script;
        self.save()?;
        Ok(true)
    }

    fn commands_dir(&self) -> PathBuf {
        self.file
            .parent()
            .map(|dir| dir.join(COMMANDS_DIR))
            .unwrap_or_else(|| PathBuf::from(COMMANDS_DIR))
    }

    /// Re-point script paths after the flow directory moved from `old` to `new`.
    pub fn relocate_scripts(&mut self, old: &Path, new: &Path) -> Result<(), StoreError> {
        for flow in &mut self.flows {
            if let Ok(rest) = flow.script.strip_prefix(old) {
                flow.script = new.join(rest);
            }
        }
        self.save()
    }

    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.flows).map_err(|source| StoreError::Serialize {
            what: "flows",
            source,
        })?;
        fs::write(&self.file, json).map_err(|source| StoreError::Write {
            path: self.file.clone(),
            source,
        })?;
        debug!(file = %self.file.display(), count = self.flows.len(), "saved flows");
        Ok(())
    }
}
