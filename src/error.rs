// SPDX-License-Identifier: MPL-2.0
//! Application-level errors for configuration I/O and start-up.
//!
//! Network failures have their own taxonomy in [`crate::api::ApiError`] because
//! they travel inside UI messages; they only end up here when the HTTP client
//! cannot be built at launch.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("HTTP Client Error: {0}")]
    Http(String),
    #[error("Window Error: {0}")]
    Window(String),
}

impl From<crate::api::ApiError> for Error {
    fn from(err: crate::api::ApiError) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
