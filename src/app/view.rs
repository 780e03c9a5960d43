// SPDX-License-Identifier: MPL-2.0
//! Page layout: heading, upload section, gallery and the toast overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{gallery, notifications, styles, upload};
use iced::widget::{column, container, stack, text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a Theme,
    pub upload: &'a upload::State,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_theme(ctx.theme);

    let heading = text(ctx.i18n.tr("app-heading"))
        .size(typography::DISPLAY)
        .color(colors.accent);

    let upload_section = upload::view(
        ctx.upload,
        upload::ViewContext {
            i18n: ctx.i18n,
            theme: ctx.theme,
            spinner_rotation: ctx.spinner_rotation,
        },
    )
    .map(Message::Upload);

    let gallery_section = gallery::view(
        ctx.gallery,
        gallery::ViewContext {
            i18n: ctx.i18n,
            theme: ctx.theme,
            spinner_rotation: ctx.spinner_rotation,
        },
    )
    .map(Message::Gallery);

    let page = column![heading, upload_section, gallery_section]
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .height(Length::Fill);

    let page = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::page);

    let toasts = notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![page, toasts].into()
}
