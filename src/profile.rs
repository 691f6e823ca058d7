use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

/// Shell dialect a flow script is generated for and run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalProfile {
    Bash,
    Zsh,
    PowerShell,
    Cmd,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid terminal profile selected: {0:?}")]
pub struct InvalidProfile(pub String);

impl TerminalProfile {
    pub const ALL: [TerminalProfile; 4] = [
        TerminalProfile::Bash,
        TerminalProfile::Zsh,
        TerminalProfile::PowerShell,
        TerminalProfile::Cmd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TerminalProfile::Bash => "bash",
            TerminalProfile::Zsh => "zsh",
            TerminalProfile::PowerShell => "powershell",
            TerminalProfile::Cmd => "cmd",
        }
    }

    /// First line of a generated script.
    pub fn header(self) -> &'static str {
        match self {
            TerminalProfile::Bash => "#!/bin/bash",
            TerminalProfile::Zsh => "#!/bin/zsh",
            TerminalProfile::PowerShell => "# PowerShell script",
            TerminalProfile::Cmd => "@echo off",
        }
    }

    /// Text placed after each guarded command.
    pub fn line_separator(self) -> &'static str {
        match self {
            TerminalProfile::Bash | TerminalProfile::Zsh => "\n\n",
            TerminalProfile::PowerShell | TerminalProfile::Cmd => "\n",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            TerminalProfile::Bash | TerminalProfile::Zsh => "sh",
            TerminalProfile::PowerShell => "ps1",
            TerminalProfile::Cmd => "bat",
        }
    }

    /// Command that executes `script`. The caller sets the working directory.
    pub fn runner(self, script: &Path) -> Command {
        match self {
            TerminalProfile::Bash | TerminalProfile::Zsh => {
                let mut cmd = Command::new("sh");
                cmd.arg(script);
                cmd
            }
            TerminalProfile::PowerShell => {
                let mut cmd = Command::new("powershell");
                cmd.args(["-NoProfile", "-ExecutionPolicy", "Bypass", "-File"]).arg(script);
                cmd
            }
            TerminalProfile::Cmd => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/C").arg(script);
                cmd
            }
        }
    }

    /// Shell command moving the whole flow directory `from` to `to`.
    pub fn move_command(self, from: &Path, to: &Path) -> Command {
        match self {
            TerminalProfile::Bash | TerminalProfile::Zsh => {
                let mut cmd = Command::new("mv");
                cmd.arg(from).arg(to);
                cmd
            }
            TerminalProfile::PowerShell => {
                let mut cmd = Command::new("powershell");
                cmd.args(["-NoProfile", "-Command", "Move-Item", "-Path"])
                    .arg(from)
                    .arg("-Destination")
                    .arg(to);
                cmd
            }
            TerminalProfile::Cmd => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "move"]).arg(from).arg(to);
                cmd
            }
        }
    }

    /// Shell command deleting `dir` recursively.
    pub fn remove_command(self, dir: &Path) -> Command {
        match self {
            TerminalProfile::Bash | TerminalProfile::Zsh => {
                let mut cmd = Command::new("rm");
                cmd.arg("-rf").arg(dir);
                cmd
            }
            TerminalProfile::PowerShell => {
                let mut cmd = Command::new("powershell");
                cmd.args(["-NoProfile", "-Command", "Remove-Item", "-Recurse", "-Force"])
                    .arg(dir);
                cmd
            }
            TerminalProfile::Cmd => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "rmdir", "/s", "/q"]).arg(dir);
                cmd
            }
        }
    }
}

impl FromStr for TerminalProfile {
    type Err = InvalidProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(TerminalProfile::Bash),
            "zsh" => Ok(TerminalProfile::Zsh),
            "powershell" => Ok(TerminalProfile::PowerShell),
            "cmd" => Ok(TerminalProfile::Cmd),
            other => Err(InvalidProfile(other.to_string())),
        }
    }
}

impl fmt::Display for TerminalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
