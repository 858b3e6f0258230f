use std::path::{Path, PathBuf};

use crate::error::{InstallerError, InstallerResult};

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "installer.log";
const DOWNLOADER_ZIP: &str = "hytale-downloader.zip";
const DOWNLOADER_DIR: &str = "hytale-downloader";
const STAGING_DIR: &str = "server-staging";

/// Absolute paths derived once from the installation directory.
/// Immutable after construction; passed by reference into each step.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    install_dir: PathBuf,
    config_file: PathBuf,
    log_file: PathBuf,
    downloader_zip: PathBuf,
    downloader_dir: PathBuf,
    staging_dir: PathBuf,
}

impl InstallPaths {
    /// Creates the installation directory if absent and resolves it to a
    /// canonical absolute path before deriving the per-artifact paths.
    pub fn new(install_dir: &Path) -> InstallerResult<Self> {
        let install_dir = canonical_or_create_dir(install_dir)?;
        Ok(Self {
            config_file: install_dir.join(CONFIG_FILE),
            log_file: install_dir.join(LOG_FILE),
            downloader_zip: install_dir.join(DOWNLOADER_ZIP),
            downloader_dir: install_dir.join(DOWNLOADER_DIR),
            staging_dir: install_dir.join(STAGING_DIR),
            install_dir,
        })
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Local destination of the vendor downloader archive.
    pub fn downloader_zip(&self) -> &Path {
        &self.downloader_zip
    }

    /// Directory the downloader archive is extracted into.
    pub fn downloader_dir(&self) -> &Path {
        &self.downloader_dir
    }

    /// Directory the server archive is extracted into before relocation.
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }
}

fn canonical_or_create_dir(path: &Path) -> InstallerResult<PathBuf> {
    std::fs::create_dir_all(path).map_err(|source| InstallerError::io(path, source))?;
    std::fs::canonicalize(path).map_err(|source| InstallerError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_under_install_dir() {
        let temp = tempfile::tempdir().unwrap();
        let paths = InstallPaths::new(temp.path()).unwrap();
        assert_eq!(paths.config_file(), paths.install_dir().join("config.json"));
        assert_eq!(paths.log_file(), paths.install_dir().join("installer.log"));
        assert!(paths.downloader_zip().starts_with(paths.install_dir()));
    }

    #[test]
    fn creates_missing_install_dir() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("server").join("hytale");
        let paths = InstallPaths::new(&nested).unwrap();
        assert!(paths.install_dir().is_dir());
    }
}
