// SPDX-License-Identifier: MPL-2.0
//! Style functions for the gallery and upload views.

pub mod button;
pub mod container;
