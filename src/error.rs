use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the installer.
/// Every fatal failure propagates to `main` as one of these variants.
#[derive(Debug, Error)]
pub enum InstallerError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Archive ─────────────────────────────────────────
    #[error("Zip extraction error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Environment ─────────────────────────────────────
    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    // ── Downloader process ──────────────────────────────
    #[error("Downloader exited with status {code}")]
    DownloaderFailed { code: i32 },

    #[error("Downloader terminated by signal {signal}")]
    DownloaderKilled { signal: i32 },

    // ── Artifact lookup ─────────────────────────────────
    #[error("No server archive found in {0:?}")]
    NoArchiveFound(PathBuf),
}

/// Convenience alias used throughout the crate.
pub type InstallerResult<T> = Result<T, InstallerError>;

impl InstallerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstallerError::Io {
            path: path.into(),
            source,
        }
    }
}
