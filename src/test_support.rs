use crate::command_handlers::Context;
use crate::config::Config;
use crate::prompt::{Prompter, Validator};
use crate::registry::{FlowRegistry, FLOWS_FILE};
use crate::versioning::NoUpdateCheck;
use anyhow::{anyhow, Result};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Debug)]
pub enum Answer {
    Choice(usize),
    Text(String),
}

/// Answers prompts from a queue. Rejected inputs are recorded and the next
/// queued answer is tried, like a user re-typing after a validation message.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    rejected: RefCell<Vec<String>>,
    asked: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn push_choice(&self, idx: usize) {
        self.answers.borrow_mut().push_back(Answer::Choice(idx));
    }
    pub fn push_text(&self, text: &str) {
        self.answers.borrow_mut().push_back(Answer::Text(text.to_string()));
    }
    pub fn rejections(&self) -> Vec<String> {
        self.rejected.borrow().clone()
    }
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, message: &str, choices: &[&str], _default: usize) -> Result<usize> {
        self.asked.set(self.asked.get() + 1);
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Choice(idx)) if idx < choices.len() => Ok(idx),
            other => Err(anyhow!("unexpected answer {other:?} for select '{message}'")),
        }
    }

    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String> {
        self.asked.set(self.asked.get() + 1);
        loop {
            let next = self.answers.borrow_mut().pop_front();
            let text = match next {
                Some(Answer::Text(t)) => t,
                other => return Err(anyhow!("unexpected answer {other:?} for input '{message}'")),
            };
            let value = match (text.is_empty(), default) {
                (true, Some(d)) => d.to_string(),
                _ => text,
            };
            match validate(value.as_str()) {
                Ok(()) => return Ok(value),
                Err(msg) => self.rejected.borrow_mut().push(msg),
            }
        }
    }
}

/// A temp directory holding config.json, flow storage and project dirs.
pub struct Sandbox {
    dir: TempDir,
    pub prompter: ScriptedPrompter,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            dir: tempfile::tempdir().expect("tempdir"),
            prompter: ScriptedPrompter::default(),
        }
    }

    /// Already initialized with the given profile string, storing flows under `<sandbox>/flows`.
    pub fn initialized(profile: &str) -> Self {
        let sb = Sandbox::new();
        let mut cfg = Config::defaults();
        cfg.set_flow_dir(sb.path().join("flows"));
        cfg.terminal_profile = profile.to_string();
        cfg.initialized = true;
        cfg.save(&sb.config_path()).expect("save config");
        sb
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.json")
    }

    pub fn ctx(&self) -> Context<'_> {
        Context {
            config_path: self.config_path(),
            cwd: self.path().to_path_buf(),
            prompter: &self.prompter,
            updates: &NoUpdateCheck,
        }
    }

    pub fn config(&self) -> Config {
        Config::load(&self.config_path()).expect("load config")
    }

    pub fn registry(&self) -> FlowRegistry {
        FlowRegistry::load(&self.config().flow_dir).expect("load registry")
    }

    pub fn flows_file(&self) -> PathBuf {
        self.config().flow_dir.join(FLOWS_FILE)
    }

    pub fn project_dir(&self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        std::fs::create_dir_all(&dir).expect("project dir");
        dir
    }
}
