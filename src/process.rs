use crate::profile::TerminalProfile;
use crate::registry::Flow;
use crate::versioning::PKG_NAME;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

pub const FALLBACK_EDITOR: &str = "code";

/// Run the flow's script with the flow directory as the child's working
/// directory. The caller's own working directory is never touched.
pub fn run_flow(flow: &Flow, profile: TerminalProfile) -> Result<ExitStatus> {
    let mut cmd = profile.runner(&flow.script);
    cmd.current_dir(&flow.path);
    execute(cmd)
}

/// Open `script` with `editor` from `cwd`. The editor string may carry
/// arguments, e.g. `code --wait`.
pub fn open_in_editor(editor: &str, script: &Path, cwd: &Path) -> Result<ExitStatus> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(FALLBACK_EDITOR);
    let mut cmd = Command::new(program);
    cmd.args(parts).arg(script).current_dir(cwd);
    execute(cmd)
}

/// `$VISUAL`, then `$EDITOR`, then the fallback. Blank values are skipped.
pub fn editor_from_env(visual: Option<&str>, editor: Option<&str>) -> String {
    visual
        .into_iter()
        .chain(editor)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(FALLBACK_EDITOR)
        .to_string()
}

/// `cargo install <this package>`, resolved through PATH.
pub fn upgrade_command() -> Result<Command> {
    let cargo = which::which("cargo").map_err(|e| anyhow!("cargo not found on PATH: {e}"))?;
    let mut cmd = Command::new(cargo);
    cmd.args(["install", PKG_NAME]);
    Ok(cmd)
}

/// Spawn and wait, inheriting stdio.
pub fn execute(mut cmd: Command) -> Result<ExitStatus> {
    debug!(command = ?cmd, "spawning");
    cmd.status()
        .with_context(|| format!("failed to start {}", cmd.get_program().to_string_lossy()))
}
