use crate::platform::PlatformOps;
use anyhow::Result;
use fs_err as fs;
use std::path::{Path, PathBuf};

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }
    fn config_dir(&self) -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(|| self.home_dir().map(|h| h.join(".config")))
            .map(|d| d.join("scriptflow"))
    }
    fn make_executable(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
        Ok(())
    }
}
