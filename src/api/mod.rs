// SPDX-License-Identifier: MPL-2.0
//! Client for the remote image-storage service.
//!
//! Every network call of the application goes through [`ImageApiClient`]:
//! the launcher's initial listing, the gallery refresh, thumbnail downloads
//! and uploads. Keeping one client avoids the endpoint and response shapes
//! drifting apart between call sites.
//!
//! The service exposes a single endpoint:
//!
//! - `GET <base>/api/v1/uploadImg` returns `{ "data": { "urls": [..] } }`
//! - `POST <base>/api/v1/uploadImg` (multipart field `image`) returns
//!   `{ "data": { "url": ".." } }`

mod error;
mod types;

pub use error::{ApiError, Result};

use crate::app::config::ApiConfig;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use std::time::Duration;
use types::{ListingResponse, UploadResponse};

/// Path of the listing/upload endpoint, relative to the service origin.
pub const ENDPOINT_PATH: &str = "/api/v1/uploadImg";

/// Multipart field name the service reads the uploaded file from.
pub const UPLOAD_FIELD: &str = "image";

const USER_AGENT: &str = concat!("BantMedia/", env!("CARGO_PKG_VERSION"));

/// Handle to the remote image service.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection
/// pool between clones.
#[derive(Debug, Clone)]
pub struct ImageApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ImageApiClient {
    /// Builds a client for the service configured in `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint_url(&config.base_url),
        })
    }

    /// Full URL of the listing/upload endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the current list of image URLs, bypassing any HTTP cache.
    pub async fn list_images(&self) -> Result<Vec<String>> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        decode_listing(status, &body)
    }

    /// Uploads the file at `path` and returns the URL the service stored it under.
    ///
    /// Exactly one file is sent, under the [`UPLOAD_FIELD`] multipart field.
    pub async fn upload_image(&self, path: PathBuf) -> Result<String> {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ApiError::File(format!("{}: {e}", path.display())))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for_path(&path))
            .map_err(|e| ApiError::Client(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        decode_upload(status, &body)
    }

    /// Downloads the raw bytes of a stored image for display.
    ///
    /// The bytes are handed to the renderer unchanged; no resizing happens here.
    pub async fn fetch_image(&self, url: String) -> Result<Vec<u8>> {
        let response = self.http.get(&url).send().await?;
        ensure_success(response.status(), |status| ApiError::Fetch { status })?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

/// Fetches the listing and degrades to an empty gallery on any failure.
///
/// This is the entry point used before the first frame is drawn: a broken or
/// unreachable service must never keep the window from opening. The cause is
/// logged, not returned.
pub async fn get_images(client: &ImageApiClient) -> Vec<String> {
    match client.list_images().await {
        Ok(urls) => {
            tracing::info!(count = urls.len(), "fetched gallery listing");
            urls
        }
        Err(err) => {
            tracing::error!(error = %err, endpoint = client.endpoint(), "error fetching images");
            Vec::new()
        }
    }
}

/// Joins the configured origin with [`ENDPOINT_PATH`].
#[must_use]
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ENDPOINT_PATH)
}

/// Maps a non-success status to the error produced by `failure`.
pub fn ensure_success(status: StatusCode, failure: fn(u16) -> ApiError) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(failure(status.as_u16()))
    }
}

/// Decodes a listing response: non-2xx is [`ApiError::Fetch`], a body of the
/// wrong shape is [`ApiError::Parse`].
pub fn decode_listing(status: StatusCode, body: &[u8]) -> Result<Vec<String>> {
    ensure_success(status, |status| ApiError::Fetch { status })?;
    parse_listing(body)
}

/// Decodes an upload response: non-2xx is [`ApiError::Upload`].
pub fn decode_upload(status: StatusCode, body: &[u8]) -> Result<String> {
    ensure_success(status, |status| ApiError::Upload { status })?;
    parse_upload(body)
}

/// Extracts `data.urls` from a listing response body.
pub fn parse_listing(body: &[u8]) -> Result<Vec<String>> {
    let response: ListingResponse = serde_json::from_slice(body)?;
    Ok(response.data.urls)
}

/// Extracts `data.url` from an upload response body.
pub fn parse_upload(body: &[u8]) -> Result<String> {
    let response: UploadResponse = serde_json::from_slice(body)?;
    Ok(response.data.url)
}

/// Content type sent with an uploaded file, guessed from its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("tif" | "tiff") => "image/tiff",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
