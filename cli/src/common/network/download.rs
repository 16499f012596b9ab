//! # jenkinsw File Download (`common::network::download`)
//!
//! File: cli/src/common/network/download.rs
//!
//! Single best-effort HTTP GET of a URL into a local file. No retry, resume or
//! checksum. The response status is checked before the destination is created, so
//! a non-2xx response never leaves a file behind; a transport failure while the
//! body is streaming leaves a partial file.
//!
use crate::common::fs::io::PRIVATE_FILE_MODE;
use crate::core::error::{JenkinswError, Result};
use anyhow::Context;
use futures_util::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Downloads `url` into `destination`, replacing any existing file.
///
/// # Errors
///
/// `JenkinswError::HttpStatus` carrying the status line for non-2xx responses;
/// I/O or transport errors otherwise.
pub async fn download(destination: &Path, url: &str) -> Result<u64> {
    info!("Downloading {} to {}", url, destination.display());

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to request {}", url))?;

    let status = response.status();
    debug!("GET {} -> {}", url, status);
    if !status.is_success() {
        anyhow::bail!(JenkinswError::HttpStatus {
            status: status.to_string()
        });
    }

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(PRIVATE_FILE_MODE);
    let mut file = options
        .open(destination)
        .await
        .with_context(|| format!("Failed to create file {}", destination.display()))?;

    let mut written: u64 = 0;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.with_context(|| format!("Failed while downloading {}", url))?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("Failed to write to {}", destination.display()))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .with_context(|| format!("Failed to flush {}", destination.display()))?;

    info!("Downloaded {} bytes to {}", written, destination.display());
    Ok(written)
}
