// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::api::ImageApiClient;
use crate::app::config::Config;
use crate::ui::{gallery, notifications, upload};
use std::time::Instant;

/// Messages consumed by `App::update`; component messages are wrapped so
/// there is a single update entry point.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Animation and notification expiry tick.
    Tick(Instant),
}

/// Everything the launcher prepared before the window opens.
#[derive(Debug, Clone)]
pub struct Flags {
    /// `--lang` value, if given.
    pub lang: Option<String>,
    pub config: Config,
    /// i18n key of a problem found while reading the settings.
    pub config_warning: Option<String>,
    pub api: ImageApiClient,
    /// Listing fetched before the first frame; empty when that fetch failed.
    pub initial_images: Vec<String>,
}
