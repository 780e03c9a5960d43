// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Service**: Remote image service origin
//! - **Gallery**: Thumbnail cache bounds and copy feedback timing

use std::time::Duration;

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Origin of the image service used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://multi-media-server.naimurrhman.com";

/// Environment variable overriding `[api] base_url`.
pub const ENV_API_URL: &str = "BANT_MEDIA_API_URL";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_CAPACITY: usize = 256;

/// Smallest accepted thumbnail cache capacity.
pub const MIN_THUMBNAIL_CACHE_CAPACITY: usize = 16;

/// Largest accepted thumbnail cache capacity.
pub const MAX_THUMBNAIL_CACHE_CAPACITY: usize = 4096;

/// How long the "URL copied" overlay stays on a card.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);
