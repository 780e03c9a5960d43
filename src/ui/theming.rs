// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and the user-facing theme mode.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the page views on top of the Iced theme palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub surface: Color,
    pub surface_border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand: Color,
    pub accent: Color,

    /// Drop zone border and tint while a file is dragged over the window.
    pub drop_highlight: Color,

    pub error_text: Color,
    pub error_background: Color,
    pub success: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: Color::from_rgb(0.94, 0.96, 1.0),
            surface: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            surface_border: palette::GRAY_300,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,

            brand: palette::PRIMARY_600,
            accent: palette::ACCENT_500,
            drop_highlight: palette::PRIMARY_500,

            error_text: palette::ERROR_800,
            error_background: Color {
                a: opacity::TINT,
                ..palette::ERROR_500
            },
            success: palette::SUCCESS_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            surface: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_800
            },
            surface_border: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,

            brand: palette::PRIMARY_400,
            accent: palette::ACCENT_500,
            drop_highlight: palette::PRIMARY_400,

            error_text: palette::ERROR_300,
            error_background: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::ERROR_800
            },
            success: palette::SUCCESS_500,
        }
    }

    /// Picks the scheme matching the Iced theme currently in use.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme preference stored in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// `System` asks the desktop and falls back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme to hand to the runtime.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
