use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{InstallerError, InstallerResult};

const DELETE_DIR_ATTEMPTS: u32 = 3;
const DELETE_DIR_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns the most recently modified `.zip` file in `dir`.
///
/// Ties are broken arbitrarily (directory listing order).
pub fn find_newest_zip(dir: &Path) -> InstallerResult<PathBuf> {
    let entries = std::fs::read_dir(dir).map_err(|source| InstallerError::io(dir, source))?;

    let mut newest: Option<(PathBuf, std::time::SystemTime)> = None;
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("zip") {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .map_err(|source| InstallerError::io(&path, source))?;
        if newest.as_ref().is_none_or(|(_, best)| modified > *best) {
            newest = Some((path, modified));
        }
    }

    newest
        .map(|(path, _)| path)
        .ok_or_else(|| InstallerError::NoArchiveFound(dir.to_path_buf()))
}

/// Recursively moves everything under `src` into `dest` (copy, then delete
/// the source). Copy failure is fatal; removing the drained source files and
/// directories is best-effort — residue is tolerated, not reported.
pub fn move_all(src: &Path, dest: &Path) -> InstallerResult<()> {
    std::fs::create_dir_all(dest).map_err(|source| InstallerError::io(dest, source))?;

    for entry in std::fs::read_dir(src).map_err(|source| InstallerError::io(src, source))? {
        let entry = entry.map_err(|source| InstallerError::io(src, source))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|source| InstallerError::io(&src_path, source))?;

        if file_type.is_dir() {
            move_all(&src_path, &dest_path)?;
            let _ = std::fs::remove_dir(&src_path);
        } else {
            std::fs::copy(&src_path, &dest_path)
                .map_err(|source| InstallerError::io(&dest_path, source))?;
            let _ = std::fs::remove_file(&src_path);
        }
    }

    Ok(())
}

/// Unlinks each path, ignoring every individual failure. Missing files are
/// not errors.
pub fn delete_files(paths: &[&Path]) {
    for path in paths {
        debug!("Deleting file {:?}", path);
        let _ = std::fs::remove_file(path);
    }
}

/// Recursively removes each directory, with guardrails: the filesystem root
/// and the current working directory are silently skipped. Removal is retried
/// a few times to ride out transient locks on just-closed handles; an
/// ultimately failed removal is warned about, never fatal.
pub async fn delete_dirs(paths: &[&Path]) {
    let cwd = std::env::current_dir().ok();

    for path in paths {
        if is_protected(path, cwd.as_deref()) {
            continue;
        }
        if !path.exists() {
            continue;
        }

        debug!("Deleting directory {:?}", path);
        let mut last_error = None;
        for attempt in 1..=DELETE_DIR_ATTEMPTS {
            match tokio::fs::remove_dir_all(path).await {
                Ok(()) => {
                    last_error = None;
                    break;
                }
                Err(source) => {
                    last_error = Some(source);
                    if attempt < DELETE_DIR_ATTEMPTS {
                        tokio::time::sleep(DELETE_DIR_RETRY_DELAY).await;
                    }
                }
            }
        }

        if let Some(source) = last_error {
            warn!("Could not remove directory {:?}: {}", path, source);
        }
    }
}

/// A path must never be deleted when it is empty, the filesystem root, or the
/// current working directory.
fn is_protected(path: &Path, cwd: Option<&Path>) -> bool {
    if path.as_os_str().is_empty() {
        return true;
    }
    let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if resolved.parent().is_none() {
        return true;
    }
    cwd.is_some_and(|cwd| resolved == cwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_empty_paths_are_protected() {
        assert!(is_protected(Path::new(""), None));
        #[cfg(unix)]
        assert!(is_protected(Path::new("/"), None));
    }

    #[test]
    fn current_dir_is_protected() {
        let cwd = std::env::current_dir().unwrap();
        assert!(is_protected(&cwd, Some(&cwd)));
    }

    #[test]
    fn ordinary_dir_is_not_protected() {
        let temp = tempfile::tempdir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert!(!is_protected(temp.path(), Some(&cwd)));
    }
}
