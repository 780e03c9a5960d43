// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Sections
//!
//! - [`upload`] - Drop zone and file picker posting one image at a time
//! - [`gallery`] - Image grid with refresh, click-to-copy and thumbnails
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toasts for transient feedback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod upload;
pub mod widgets;
