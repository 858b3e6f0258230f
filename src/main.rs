use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use hytale_installer::config::InstallerConfig;
use hytale_installer::installer::Installer;
use hytale_installer::logging;
use hytale_installer::paths::InstallPaths;

#[derive(Parser, Debug)]
#[command(author, version, about = "Installs and launches the Hytale dedicated server")]
struct Args {
    /// Installation directory (defaults to the current working directory)
    #[arg(long)]
    dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let install_dir = match args.dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(source) => {
                eprintln!("Cannot determine the working directory: {source}");
                return ExitCode::FAILURE;
            }
        },
    };

    let paths = match InstallPaths::new(&install_dir) {
        Ok(paths) => paths,
        Err(source) => {
            eprintln!("Cannot prepare installation directory {install_dir:?}: {source}");
            return ExitCode::FAILURE;
        }
    };

    // Logging first so the config loader can report parse problems; this also
    // truncates the log file for the run.
    logging::init(paths.log_file());
    info!("Hytale installer starting in {:?}", paths.install_dir());

    let config = InstallerConfig::load(paths.config_file());

    let installer = match Installer::new(paths, config) {
        Ok(installer) => installer,
        Err(source) => {
            error!("Could not initialize the installer: {}", source);
            return ExitCode::FAILURE;
        }
    };

    if let Err(source) = installer.run().await {
        error!("Installation failed: {}", source);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
