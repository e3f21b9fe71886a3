//! Streaming a local file to a pre-authorised upload target.
//!
//! The platform hands out a short-lived target URL per media item
//! (`media_upload_get`); the wire protocol beyond "send the bytes there"
//! belongs to the target. No retries and no partial-application guarantee:
//! unless success is observed, assume nothing was stored.

use std::path::Path;

use chrono::Utc;
use thiserror::Error;
use tokio_util::io::ReaderStream;
use tracing::{error, info};

use crate::resources::MediaUpload;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The target expired before we started sending. Fetch a fresh one.
    #[error("upload target expired at {0}")]
    Expired(chrono::DateTime<Utc>),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The target answered with a non-success status.
    #[error("upload rejected with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Stream `path` to the upload target.
pub async fn send_file(upload: &MediaUpload, path: &Path) -> Result<(), UploadError> {
    if upload.expires_at <= Utc::now() {
        return Err(UploadError::Expired(upload.expires_at));
    }

    let file = tokio::fs::File::open(path).await?;
    let length = file.metadata().await?.len();
    let stream = ReaderStream::new(file);

    let client = reqwest::Client::new();
    let response = client
        .put(&upload.url)
        .header(reqwest::header::CONTENT_LENGTH, length)
        .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
        .body(reqwest::Body::wrap_stream(stream))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        error!("upload rejected: {} from {}", status, upload.url);
        return Err(UploadError::Rejected(status));
    }

    info!("uploaded {} ({} bytes)", path.display(), length);
    Ok(())
}
