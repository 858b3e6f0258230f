use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Flat installer configuration persisted as `config.json`.
///
/// Loaded once at startup and immutable for the process lifetime. Missing
/// fields fall back to defaults (field-by-field, the config has no nesting);
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallerConfig {
    /// Launch `HytaleServer.jar` after installation.
    pub start_server: bool,
    /// Delete the downloader and server archives once the files are in place.
    pub clean_up: bool,
    /// Extra arguments passed to the vendor downloader (space-separated).
    pub downloader_args: String,
    /// JVM arguments placed before `-jar` (space-separated).
    pub java_args: String,
    /// Server arguments placed after the jar name (space-separated).
    pub hytale_args: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            start_server: true,
            clean_up: true,
            downloader_args: String::new(),
            java_args: String::new(),
            hytale_args: String::new(),
        }
    }
}

impl InstallerConfig {
    /// Loads the config from `path`, creating it with defaults if absent.
    ///
    /// Never fails past this boundary: an unreadable or malformed file is
    /// logged and the in-memory defaults are used, leaving the file untouched.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            let defaults = Self::default();
            if let Err(source) = defaults.write(path) {
                warn!("Could not write default config to {:?}: {}", path, source);
            } else {
                info!("Created default config at {:?}", path);
            }
            return defaults;
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) => {
                error!("Could not read config {:?}: {}; using defaults", path, source);
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(source) => {
                error!("Malformed config {:?}: {}; using defaults", path, source);
                Self::default()
            }
        }
    }

    fn write(&self, path: &Path) -> std::io::Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        std::fs::write(path, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_and_clean() {
        let config = InstallerConfig::default();
        assert!(config.start_server);
        assert!(config.clean_up);
        assert!(config.downloader_args.is_empty());
        assert!(config.java_args.is_empty());
        assert!(config.hytale_args.is_empty());
    }

    #[test]
    fn partial_file_overrides_single_field() {
        let config: InstallerConfig = serde_json::from_str(r#"{"startServer": false}"#).unwrap();
        let defaults = InstallerConfig::default();
        assert!(!config.start_server);
        assert_eq!(config.clean_up, defaults.clean_up);
        assert_eq!(config.java_args, defaults.java_args);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config: InstallerConfig =
            serde_json::from_str(r#"{"cleanUp": false, "legacyOption": 3}"#).unwrap();
        assert!(!config.clean_up);
        assert!(config.start_server);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&InstallerConfig::default()).unwrap();
        assert!(json.contains("startServer"));
        assert!(json.contains("downloaderArgs"));
        assert!(json.contains("hytaleArgs"));
    }
}
