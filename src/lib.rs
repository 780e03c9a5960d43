// SPDX-License-Identifier: MPL-2.0
//! `bant_media` is a desktop client for a remote image-storage service, built
//! with the Iced GUI framework.
//!
//! It uploads images by drag-and-drop or file picker, shows the stored images
//! as a grid, and copies an image URL to the clipboard with one click.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
