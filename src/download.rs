use std::path::Path;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{InstallerError, InstallerResult};

const USER_AGENT: &str = concat!("hytale-installer/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for the single download in the pipeline.
///
/// Redirects are disabled: the download is one plain GET against a fixed URL,
/// and anything other than a 200 response is treated as failure.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// Downloads `url` to `dest`, streaming the body straight to disk.
///
/// Single attempt, all-or-nothing: no retry, no resume, no checksum.
pub async fn download(client: &Client, url: &str, dest: &Path) -> InstallerResult<()> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| InstallerError::io(parent, source))?;
    }

    info!("Downloading {} -> {:?}", url, dest);
    let response = client.get(url).send().await?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(InstallerError::DownloadFailed {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Write inside a block so the handle is dropped before we return —
    // the file is reopened for extraction right after this.
    {
        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|source| InstallerError::io(dest, source))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .await
                .map_err(|source| InstallerError::io(dest, source))?;
        }

        file.flush()
            .await
            .map_err(|source| InstallerError::io(dest, source))?;
    }

    debug!("Download complete: {:?}", dest);
    Ok(())
}
