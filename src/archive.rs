use std::path::Path;

use tracing::debug;

use crate::error::{InstallerError, InstallerResult};

/// Extracts a zip archive into `target_dir`, creating it (and parents) first.
///
/// Entries are written in central-directory listing order; a later entry with
/// the same path overwrites an earlier one. Any single-entry failure aborts
/// the whole extraction.
pub fn extract(archive_path: &Path, target_dir: &Path) -> InstallerResult<()> {
    let zip_file = std::fs::File::open(archive_path)
        .map_err(|source| InstallerError::io(archive_path, source))?;
    let mut archive = zip::ZipArchive::new(zip_file)?;

    std::fs::create_dir_all(target_dir)
        .map_err(|source| InstallerError::io(target_dir, source))?;

    debug!("Extracting {:?} ({} entries)", archive_path, archive.len());

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(InstallerError::Zip(zip::result::ZipError::InvalidArchive(
                "entry path escapes the target directory".into(),
            )));
        };
        let out_path = target_dir.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)
                .map_err(|source| InstallerError::io(&out_path, source))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| InstallerError::io(parent, source))?;
        }

        let mut out = std::fs::File::create(&out_path)
            .map_err(|source| InstallerError::io(&out_path, source))?;
        std::io::copy(&mut entry, &mut out)
            .map_err(|source| InstallerError::io(&out_path, source))?;
    }

    Ok(())
}

/// Marks the downloader binary executable. No-op on Windows.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> InstallerResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(|source| InstallerError::io(path, source))?
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).map_err(|source| InstallerError::io(path, source))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> InstallerResult<()> {
    Ok(())
}
