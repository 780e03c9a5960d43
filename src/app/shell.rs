// SPDX-License-Identifier: MPL-2.0
//! Start-up sequence: settings, the initial listing, then the window.
//!
//! The listing is fetched on a short-lived runtime before Iced starts so the
//! first frame already shows the gallery. That fetch never fails the launch;
//! any problem yields an empty gallery.

use super::config::{self, ApiConfig};
use super::{paths, Flags};
use crate::api::{self, ImageApiClient};
use crate::error::Result;

/// Command-line options understood by the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub lang: Option<String>,
    pub config_dir: Option<String>,
    pub api_url: Option<String>,
}

/// Loads everything the application needs and runs it until the window closes.
pub fn launch(options: LaunchOptions) -> Result<()> {
    paths::init_cli_overrides(options.config_dir);
    let flags = prepare(options.lang, options.api_url)?;
    super::run(flags)?;
    Ok(())
}

/// Builds the launch flags from the settings on disk.
pub fn prepare(lang: Option<String>, api_url: Option<String>) -> Result<Flags> {
    match config::write_defaults_if_missing(None) {
        Ok(true) => tracing::info!("wrote default settings"),
        Ok(false) => {}
        Err(err) => tracing::warn!(error = %err, "could not write default settings"),
    }

    let (mut config, config_warning) = config::load();
    config.apply_api_url_override(api_url);
    tracing::info!(base_url = %config.api.base_url, "using image service");

    let api = ImageApiClient::new(&config.api)?;
    let initial_images = fetch_initial_images(&config.api);

    Ok(Flags {
        lang,
        config,
        config_warning,
        api,
        initial_images,
    })
}

/// Fetches the listing once, blocking the caller.
///
/// Uses its own client so no pooled connection outlives the temporary runtime.
pub fn fetch_initial_images(api_config: &ApiConfig) -> Vec<String> {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "cannot start runtime for the initial listing");
            return Vec::new();
        }
    };

    let client = match ImageApiClient::new(api_config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "cannot build client for the initial listing");
            return Vec::new();
        }
    };

    runtime.block_on(api::get_images(&client))
}
