// SPDX-License-Identifier: MPL-2.0
//! Upload section: heading, drop zone and browse button.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, column, container, mouse_area, text, Column};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a Theme,
    pub spinner_rotation: f32,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let colors = ColorScheme::for_theme(ctx.theme);
    let uploading = state.is_uploading();

    let heading = column![
        text(i18n.tr("upload-title"))
            .size(typography::TITLE_LG)
            .color(colors.text_primary),
        text(i18n.tr("upload-subtitle"))
            .size(typography::BODY)
            .color(colors.text_secondary),
    ]
    .spacing(spacing::XS)
    .align_x(alignment::Horizontal::Center);

    let zone_body: Element<'a, Message> = if uploading {
        column![
            AnimatedSpinner::new(colors.brand, ctx.spinner_rotation).into_element(),
            text(i18n.tr("upload-in-progress"))
                .size(typography::BODY_LG)
                .color(colors.brand),
        ]
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        column![
            text(i18n.tr("upload-drop-hint"))
                .size(typography::BODY_LG)
                .color(if state.is_drag_active() {
                    colors.drop_highlight
                } else {
                    colors.text_primary
                }),
            text(i18n.tr("upload-formats"))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .into()
    };

    let zone = container(zone_body)
        .width(Length::Fill)
        .max_width(sizing::DROP_ZONE_WIDTH)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::drop_zone(state.is_drag_active()));

    // The whole zone browses on click, like the button.
    let zone: Element<'a, Message> = if uploading {
        zone.into()
    } else {
        mouse_area(zone).on_press(Message::BrowseRequested).into()
    };

    let browse = button(text(i18n.tr("upload-browse-button")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe((!uploading).then_some(Message::BrowseRequested));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(zone)
        .push(browse);

    if let Some(key) = state.error_key() {
        content = content.push(
            container(text(i18n.tr(key)).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::error_banner),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::panel)
        .into()
}
