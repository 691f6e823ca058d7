use crate::platform::platform;
use crate::profile::TerminalProfile;
use anyhow::{Context, Result};
use fs_err as fs;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appended to every command: echo output to the terminal and stop the
/// script with a failure status if it mentions "Error".
pub const ERROR_GUARD: &str = r#"| tee -a /dev/tty | grep -q "Error" && exit 1 || exit 0"#;

pub const COMMAND_SEPARATOR: char = ',';

static LEGACY_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A(?:#[^\n]*|@echo off)\r?\n\r?\n").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    pub content: String,
    pub extension: &'static str,
}

/// Render the script body for a comma separated command list.
pub fn render(profile: TerminalProfile, commands: &str) -> GeneratedScript {
    let mut content = format!("{}\n\n", profile.header());
    for command in commands
        .split(COMMAND_SEPARATOR)
        .filter(|c| !c.trim().is_empty())
    {
        content.push_str(command);
        content.push_str(ERROR_GUARD);
        content.push_str(profile.line_separator());
    }
    GeneratedScript {
        content,
        extension: profile.extension(),
    }
}

/// Write `<command_dir>/<name>/script.<ext>` and return its path.
pub fn write_script(
    command_dir: &Path,
    name: &str,
    profile: TerminalProfile,
    commands: &str,
) -> Result<PathBuf> {
    let generated = render(profile, commands);
    let path = command_dir
        .join(name)
        .join(format!("script.{}", generated.extension));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, &generated.content)?;
    platform().make_executable(&path)?;
    debug!(script = %path.display(), "wrote flow script");
    Ok(path)
}

/// Commands recovered from a script written before the error guard existed,
/// or `None` when the script is already in the guarded format.
pub fn legacy_commands(content: &str) -> Option<String> {
    if content.contains(ERROR_GUARD) {
        return None;
    }
    let body = LEGACY_HEADER.replace(content, "");
    let commands: Vec<&str> = body
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();
    let sep = COMMAND_SEPARATOR.to_string();
    Some(commands.join(sep.as_str()))
}

/// Regenerate a legacy script for `profile`. The file keeps its stem but takes
/// the profile's extension; a script renamed that way replaces the old file.
/// Returns the script's path, or `None` when it is already current.
pub fn migrate_script(path: &Path, profile: TerminalProfile) -> Result<Option<PathBuf>> {
    let content = fs::read_to_string(path)?;
    let Some(commands) = legacy_commands(&content) else {
        return Ok(None);
    };
    let target = path.with_extension(profile.extension());
    fs::write(&target, render(profile, &commands).content)?;
    platform().make_executable(&target)?;
    if target != path {
        fs::remove_file(path)?;
    }
    debug!(script = %target.display(), "migrated legacy script");
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_guards_each_command() {
        let script = render(TerminalProfile::Bash, "echo hi,echo bye");
        assert_eq!(script.extension, "sh");
        assert!(script.content.starts_with("#!/bin/bash\n\n"));
        assert_eq!(script.content.matches(ERROR_GUARD).count(), 2);
        assert_eq!(
            script.content,
            format!("#!/bin/bash\n\necho hi{ERROR_GUARD}\n\necho bye{ERROR_GUARD}\n\n")
        );
    }

    #[test]
    fn trailing_separator_adds_no_empty_command() {
        let a = render(TerminalProfile::Zsh, "make,make test,");
        let b = render(TerminalProfile::Zsh, "make,make test");
        assert_eq!(a, b);
        assert!(a.content.starts_with("#!/bin/zsh\n\n"));
        assert_eq!(a.content.matches(ERROR_GUARD).count(), 2);
    }

    #[test]
    fn windows_profiles_use_single_newlines() {
        let cmd = render(TerminalProfile::Cmd, "dir,echo done");
        assert_eq!(cmd.extension, "bat");
        assert_eq!(
            cmd.content,
            format!("@echo off\n\ndir{ERROR_GUARD}\necho done{ERROR_GUARD}\n")
        );
        let ps = render(TerminalProfile::PowerShell, "Get-Date");
        assert_eq!(ps.extension, "ps1");
        assert!(ps.content.starts_with("# PowerShell script\n\n"));
        assert!(!ps.content.starts_with("#!"));
    }

    #[test]
    fn write_script_creates_flow_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let commands = tmp.path().join("commands");
        let path = write_script(&commands, "build", TerminalProfile::Bash, "make").unwrap();
        assert_eq!(path, commands.join("build").join("script.sh"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(TerminalProfile::Bash, "make").content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    #[test]
    fn legacy_script_is_migrated_once() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("script.sh");
        fs::write(&path, "#!/bin/bash\n\nnpm ci\n\nnpm test\n\n").unwrap();

        assert_eq!(migrate_script(&path, TerminalProfile::Bash).unwrap(), Some(path.clone()));
        let migrated = fs::read_to_string(&path).unwrap();
        assert_eq!(migrated, render(TerminalProfile::Bash, "npm ci,npm test").content);

        assert_eq!(migrate_script(&path, TerminalProfile::Bash).unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), migrated);
    }

    #[test]
    fn migration_follows_profile_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("script.sh");
        fs::write(&path, "#!/bin/bash\n\nnpm ci\n\n").unwrap();

        let moved = migrate_script(&path, TerminalProfile::Cmd).unwrap().unwrap();
        assert_eq!(moved, tmp.path().join("script.bat"));
        assert!(!path.exists());
        assert_eq!(
            fs::read_to_string(&moved).unwrap(),
            render(TerminalProfile::Cmd, "npm ci").content
        );
    }

    #[test]
    fn legacy_commands_handles_batch_header() {
        assert_eq!(
            legacy_commands("@echo off\n\ndir\n\necho done").as_deref(),
            Some("dir,echo done")
        );
        assert_eq!(legacy_commands(&render(TerminalProfile::Cmd, "dir").content), None);
    }
}
