use crate::platform::PlatformOps;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn home_dir(&self) -> Option<PathBuf> { std::env::var_os("USERPROFILE").map(PathBuf::from) }
    fn config_dir(&self) -> Option<PathBuf> { dirs::config_dir().or_else(|| self.home_dir()).map(|d| d.join("scriptflow")) }
    fn make_executable(&self, _path: &Path) -> Result<()> { Ok(()) }
}
