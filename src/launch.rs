use std::process::Stdio;

use tokio::process::Command;
use tracing::{error, info};

use crate::config::InstallerConfig;
use crate::paths::InstallPaths;
use crate::process::split_args;

/// Name of the server jar produced by the vendor downloader.
pub const SERVER_JAR: &str = "HytaleServer.jar";

/// Launches the downloaded server, if the configuration asks for it.
///
/// Fire-and-forget: the installer waits for the server to terminate only to
/// log its exit code; launch failures are logged, never fatal, since the
/// install itself has already succeeded.
pub async fn launch_server(paths: &InstallPaths, config: &InstallerConfig) {
    if !config.start_server {
        info!("Server start skipped (startServer is false)");
        return;
    }

    let mut command = Command::new("java");
    command
        .args(split_args(&config.java_args))
        .arg("-jar")
        .arg(SERVER_JAR)
        .args(split_args(&config.hytale_args))
        .current_dir(paths.install_dir())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!(
        "Starting server: java {} -jar {} {}",
        config.java_args, SERVER_JAR, config.hytale_args
    );

    match command.status().await {
        Ok(status) => match status.code() {
            Some(code) => info!("Server exited with status {}", code),
            None => info!("Server terminated by signal"),
        },
        Err(source) => error!("Could not start the server: {}", source),
    }
}
