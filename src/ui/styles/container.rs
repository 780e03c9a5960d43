// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Frosted section surface (upload section, empty state).
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        border: Border {
            color: colors.surface_border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dashed-looking drop target; highlighted while a file hovers the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let (background, border_color) = if active {
            (
                Color {
                    a: opacity::TINT,
                    ..colors.drop_highlight
                },
                colors.drop_highlight,
            )
        } else {
            (Color::TRANSPARENT, colors.surface_border)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Inline error message shown above the grid or under the drop zone.
pub fn error_banner(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.error_background)),
        text_color: Some(colors.error_text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::ERROR_500
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Pill showing the number of images.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..colors.brand
        })),
        text_color: Some(colors.brand),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder behind a thumbnail that is still loading or failed.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.text_secondary
        })),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Scrim laid over a card whose URL was just copied.
pub fn copied_overlay(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(colors.success),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
