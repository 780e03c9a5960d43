// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (browse, empty-state call to action).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_300
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined button used for the gallery refresh action.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, border_color) = match status {
        button::Status::Hovered => (
            Color {
                a: opacity::TINT,
                ..colors.brand
            },
            colors.brand,
        ),
        button::Status::Pressed => (
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.brand
            },
            colors.brand,
        ),
        button::Status::Active | button::Status::Disabled => {
            (Color::TRANSPARENT, colors.surface_border)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            colors.brand
        },
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless wrapper around a gallery card; hovering lifts the card.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (border_color, card_shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (colors.brand, shadow::LG),
        button::Status::Active | button::Status::Disabled => (colors.surface_border, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
            ..card_shadow
        },
        snap: true,
    }
}
