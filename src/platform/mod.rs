pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

pub trait PlatformOps: Sync + Send {
    fn home_dir(&self) -> Option<PathBuf>;
    /// Directory holding config.json for this installation.
    fn config_dir(&self) -> Option<PathBuf>;
    fn make_executable(&self, path: &Path) -> Result<()>;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;

/// Default location of the config file when `--config` is not given.
pub fn default_config_path() -> PathBuf {
    platform()
        .config_dir()
        .unwrap_or_else(|| PathBuf::from(".scriptflow"))
        .join("config.json")
}

/// `<home>/.flow`, the storage root a fresh install points at.
pub fn default_flow_dir() -> PathBuf {
    platform()
        .home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".flow")
}

// Older config files carried a literal `$USER_HOME` placeholder; `~` is accepted too.
pub fn expand_home(raw: &str) -> PathBuf {
    let raw = raw.trim();
    let Some(home) = platform().home_dir() else {
        return PathBuf::from(raw);
    };
    for prefix in ["$USER_HOME", "~"] {
        if let Some(rest) = raw.strip_prefix(prefix) {
            if rest.is_empty() {
                return home;
            }
            if let Some(rest) = rest.strip_prefix(['/', '\\']) {
                return home.join(rest);
            }
        }
    }
    PathBuf::from(raw)
}

/// Resolve `path` against `base` unless it is already absolute, dropping `.`
/// and folding `..` without touching the filesystem.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    let mut out = PathBuf::new();
    for part in joined.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(part);
                }
            }
            other => out.push(other),
        }
    }
    out
}
