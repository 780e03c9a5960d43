// SPDX-License-Identifier: MPL-2.0
//! Rendering of the visible notifications in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

const ACCENT_BAR_WIDTH: f32 = 4.0;

fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let accent_bar = container(Space::new())
        .width(Length::Fixed(ACCENT_BAR_WIDTH))
        .height(Length::Fixed(sizing::ICON_MD))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let message = text(i18n.tr(notification.message_key()))
        .size(typography::BODY)
        .width(Length::Fill);

    let dismiss = button(text("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(accent_bar)
        .push(message)
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Stacks every visible notification; renders nothing when there are none.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view(notification, i18n))
        .collect();

    if toasts.is_empty() {
        return Space::new().into();
    }

    Container::new(
        Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_border_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        assert!(dismiss_button_style(&Theme::Light, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&Theme::Light, button::Status::Hovered)
            .background
            .is_some());
    }
}
