use crate::error::{InstallerError, InstallerResult};

/// Name of the platform-specific downloader executable for the host OS.
///
/// Checked before any network or filesystem activity so an unsupported
/// platform fails without side effects.
pub fn downloader_binary() -> InstallerResult<&'static str> {
    downloader_binary_for(std::env::consts::OS)
}

pub fn downloader_binary_for(os: &str) -> InstallerResult<&'static str> {
    match os {
        "windows" => Ok("hytale-downloader-windows-amd64.exe"),
        "linux" => Ok("hytale-downloader-linux-amd64"),
        other => Err(InstallerError::UnsupportedPlatform(other.to_string())),
    }
}
