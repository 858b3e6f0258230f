use reqwest::Client;
use tracing::info;

use crate::config::InstallerConfig;
use crate::error::InstallerResult;
use crate::paths::InstallPaths;
use crate::{archive, download, fsops, java, launch, platform, process};

/// Fixed endpoint serving the platform downloader executables.
pub const DOWNLOADER_URL: &str = "https://downloads.hytale.com/hytale-downloader.zip";

/// Everything the pipeline steps need, built once at startup.
pub struct Installer {
    paths: InstallPaths,
    config: InstallerConfig,
    client: Client,
}

impl Installer {
    pub fn new(paths: InstallPaths, config: InstallerConfig) -> InstallerResult<Self> {
        let client = download::build_http_client()?;
        Ok(Self {
            paths,
            config,
            client,
        })
    }

    /// Drives the install pipeline. Strictly sequential; the first failing
    /// step aborts everything after it.
    pub async fn run(&self) -> InstallerResult<()> {
        let downloader_name = platform::downloader_binary()?;
        java::check_java()?;

        download::download(&self.client, DOWNLOADER_URL, self.paths.downloader_zip()).await?;
        archive::extract(self.paths.downloader_zip(), self.paths.downloader_dir())?;

        let downloader = self.paths.downloader_dir().join(downloader_name);
        archive::make_executable(&downloader)?;
        process::run_downloader(
            &downloader,
            &self.config.downloader_args,
            self.paths.install_dir(),
        )
        .await?;

        // The downloader drops a zip of server assets into the install dir.
        let server_zip = fsops::find_newest_zip(self.paths.install_dir())?;
        info!("Server archive: {:?}", server_zip);
        archive::extract(&server_zip, self.paths.staging_dir())?;
        fsops::move_all(self.paths.staging_dir(), self.paths.install_dir())?;

        if self.config.clean_up {
            fsops::delete_files(&[self.paths.downloader_zip(), server_zip.as_path()]);
            fsops::delete_dirs(&[self.paths.downloader_dir(), self.paths.staging_dir()]).await;
        } else {
            info!("Cleanup skipped (cleanUp is false)");
        }

        info!("Installation complete");
        launch::launch_server(&self.paths, &self.config).await;
        Ok(())
    }
}
