// SPDX-License-Identifier: MPL-2.0
//! Failure taxonomy for calls to the remote image service.

use thiserror::Error;

/// Errors produced by [`super::ImageApiClient`].
///
/// Kept `Clone` so results can be carried inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The listing (or image download) answered with a non-success status.
    #[error("failed to fetch images: HTTP {status}")]
    Fetch { status: u16 },

    /// The upload answered with a non-success status.
    #[error("failed to upload image: HTTP {status}")]
    Upload { status: u16 },

    /// Network unreachable, connection reset, timeout and the like.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body did not have the expected JSON shape.
    #[error("malformed response: {0}")]
    Parse(String),

    /// The local file selected for upload could not be read.
    #[error("cannot read file: {0}")]
    File(String),

    /// The HTTP client or request could not be built.
    #[error("cannot build request: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if err.is_builder() {
            ApiError::Client(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
