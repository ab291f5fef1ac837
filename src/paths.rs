//! File locations derived from a home directory and the build workspace.
//!
//! The home directory is an explicit field rather than an ambient
//! `dirs::home_dir()` call at each use site, so tests (and any embedding
//! process) can point the writers somewhere hermetic.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Well-known location the knife keyfile is written to. Deliberately not
/// secret-tightened; the external tools read it by this fixed path.
pub const KEYFILE_PATH: &str = "/tmp/key.pem";

#[derive(Debug, Clone)]
pub struct Paths {
    home: PathBuf,
    workspace: PathBuf,
}

impl Paths {
    pub fn new(home: impl Into<PathBuf>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            workspace: workspace.into(),
        }
    }

    /// Build paths from the process's home directory.
    pub fn resolve(workspace: &Path) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("cannot determine home directory"))?;
        Ok(Self::new(home, workspace))
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn keyfile(&self) -> PathBuf {
        PathBuf::from(KEYFILE_PATH)
    }

    pub fn knife_config(&self) -> PathBuf {
        self.home.join(".chef").join("knife.rb")
    }

    pub fn berks_config(&self) -> PathBuf {
        self.home.join(".berkshelf").join("config.json")
    }

    pub fn netrc(&self) -> PathBuf {
        self.home.join(".netrc")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_hang_off_home() {
        let paths = Paths::new("/root", "/build/repo");
        assert_eq!(paths.knife_config(), PathBuf::from("/root/.chef/knife.rb"));
        assert_eq!(
            paths.berks_config(),
            PathBuf::from("/root/.berkshelf/config.json")
        );
        assert_eq!(paths.netrc(), PathBuf::from("/root/.netrc"));
        assert_eq!(paths.keyfile(), PathBuf::from("/tmp/key.pem"));
        assert_eq!(paths.workspace(), Path::new("/build/repo"));
    }
}
