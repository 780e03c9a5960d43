// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: header, error banner, loading indicator, empty state and
//! the card grid.

use super::thumbnails::{CARD_CAPTION_HEIGHT, CARD_PADDING, CARD_SECTION_GAP, GRID_GAP};
use super::{Message, State, Thumbnail, ViewportMetrics};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, column, container, image, row, scrollable, sensor, stack, text, Column, Row,
    Space,
};
use iced::{alignment, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a Theme,
    pub spinner_rotation: f32,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(ctx.theme);
    let mut content = Column::new().spacing(spacing::LG).width(Length::Fill);

    if let Some(key) = state.error_key() {
        content = content.push(
            container(text(ctx.i18n.tr(key)).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::SM, spacing::MD])
                .style(styles::container::error_banner),
        );
    }

    let body: Element<'a, Message> = if state.is_loading() && !state.shows_content_while_loading()
    {
        loading(&ctx, &colors)
    } else if state.images().is_empty() {
        if state.is_loading() {
            loading(&ctx, &colors)
        } else {
            empty_state(&ctx, &colors)
        }
    } else {
        column![header(state, &ctx, &colors), grid(state, &ctx, &colors)]
            .spacing(spacing::LG)
            .height(Length::Fill)
            .into()
    };

    content.push(body).height(Length::Fill).into()
}

fn loading<'a>(ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let indicator = column![
        AnimatedSpinner::new(colors.brand, ctx.spinner_rotation)
            .size(sizing::ICON_XXL)
            .into_element(),
        text(ctx.i18n.tr("gallery-loading"))
            .size(typography::BODY)
            .color(colors.text_secondary),
    ]
    .spacing(spacing::MD)
    .align_x(alignment::Horizontal::Center);

    container(indicator)
        .width(Length::Fill)
        .padding([spacing::XXL, 0.0])
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let content = column![
        text(ctx.i18n.tr("gallery-empty-title"))
            .size(typography::TITLE_LG)
            .color(colors.text_primary),
        text(ctx.i18n.tr("gallery-empty-subtitle"))
            .size(typography::BODY)
            .color(colors.text_secondary),
        button(text(ctx.i18n.tr("gallery-empty-button")).size(typography::BODY))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary)
            .on_press(Message::RefreshRequested),
    ]
    .spacing(spacing::MD)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::panel)
        .into()
}

fn header<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let count = state.images().len().to_string();
    let badge = container(
        text(
            ctx.i18n
                .tr_with_args("gallery-image-count", &[("count", count.as_str())]),
        )
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::badge);

    let mut refresh = row![].spacing(spacing::XS).align_y(alignment::Vertical::Center);
    if state.is_loading() {
        // Only reachable when the stale grid is kept on screen.
        refresh = refresh.push(
            AnimatedSpinner::new(colors.brand, ctx.spinner_rotation)
                .size(sizing::ICON_MD)
                .into_element(),
        );
    }
    refresh = refresh.push(
        button(text(ctx.i18n.tr("gallery-refresh")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary)
            .on_press(Message::RefreshRequested),
    );

    row![
        text(ctx.i18n.tr("gallery-title"))
            .size(typography::TITLE_MD)
            .color(colors.text_primary),
        badge,
        Space::new().width(Length::Fill),
        refresh,
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn grid<'a>(state: &'a State, ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let cards = state
        .display_order()
        .into_iter()
        .map(|url| card(state, url, ctx, colors));

    let grid = Row::with_children(cards)
        .spacing(GRID_GAP)
        .wrap()
        .vertical_spacing(GRID_GAP);

    let grid = scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled(ViewportMetrics::from(viewport)));

    // The scrollable only reports while its content overflows.
    sensor(grid).on_resize(Message::GridResized).into()
}

fn card<'a>(
    state: &'a State,
    url: &'a str,
    ctx: &ViewContext<'a>,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.thumbnail(url) {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder(ctx.i18n.tr("gallery-thumbnail-failed")),
        Some(Thumbnail::Pending) | None => {
            placeholder(ctx.i18n.tr("gallery-thumbnail-loading"))
        }
    };

    let picture: Element<'a, Message> = if state.copied_url() == Some(url) {
        let feedback = container(
            text(ctx.i18n.tr("copy-feedback"))
                .size(typography::BODY_LG)
                .color(colors.success),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::copied_overlay);

        stack![picture, feedback].into()
    } else {
        picture
    };

    let caption = column![
        text(url).size(typography::CAPTION).color(colors.text_primary),
        text(ctx.i18n.tr("copy-hint"))
            .size(typography::CAPTION)
            .color(colors.text_secondary),
    ]
    .spacing(spacing::XXS)
    .height(Length::Fixed(CARD_CAPTION_HEIGHT))
    .clip(true);

    button(column![picture, caption].spacing(CARD_SECTION_GAP))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(CARD_PADDING)
        .style(styles::button::card)
        .on_press(Message::CardClicked(url.to_owned()))
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::thumbnail_placeholder)
        .into()
}
