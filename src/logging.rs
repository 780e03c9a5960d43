// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. The default
//! level is `info`; `BANT_MEDIA_LOG` adds comma-separated directives on top
//! (for example `BANT_MEDIA_LOG=debug` or `BANT_MEDIA_LOG=bant_media::api=trace`).

use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding extra filter directives.
pub const ENV_LOG_LEVEL: &str = "BANT_MEDIA_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Installs the global subscriber. Calling it twice is harmless: the second
/// call reports that a subscriber already exists and leaves it in place.
pub fn init() {
    let filter = filter_from_environment(DEFAULT_DIRECTIVES, std::env::var(ENV_LOG_LEVEL).ok());

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .try_init();

    if let Err(err) = result {
        eprintln!("WARN logging already initialized: {err}");
    }
}

/// Builds an `EnvFilter` from `default_directives`, merging in every valid
/// directive of `extra`. Invalid directives are reported and skipped.
pub fn filter_from_environment(default_directives: &str, extra: Option<String>) -> EnvFilter {
    let mut filter = EnvFilter::new(default_directives);

    if let Some(value) = extra {
        for directive in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => eprintln!("WARN ignoring log directive: {directive:?}: {err}"),
            }
        }
    }

    filter
}
