use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::info;

use crate::error::{InstallerError, InstallerResult};

/// Splits a configured argument string on single spaces.
///
/// No quoting or escaping support — a known limitation kept on purpose so
/// existing configurations behave identically.
pub fn split_args(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs the vendor downloader and waits for it to exit.
///
/// The child inherits the installer's standard streams so its progress output
/// is visible. Anything other than a clean exit 0 is fatal.
pub async fn run_downloader(
    executable: &Path,
    raw_args: &str,
    working_dir: &Path,
) -> InstallerResult<()> {
    let args = split_args(raw_args);
    info!("Running downloader {:?} with args {:?}", executable, args);

    let status = Command::new(executable)
        .args(&args)
        .current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| InstallerError::io(executable, source))?;

    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(InstallerError::DownloaderFailed { code }),
        None => {
            #[cfg(unix)]
            let signal = {
                use std::os::unix::process::ExitStatusExt;
                status.signal().unwrap_or(-1)
            };
            #[cfg(not(unix))]
            let signal = -1;
            Err(InstallerError::DownloaderKilled { signal })
        }
    }
}
