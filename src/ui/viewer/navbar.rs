// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar: previous, page indicator, next.

use super::component::Message;
use crate::document::{PageCount, PageNumber};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Row, Space};
use iced::{alignment, Color, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: PageNumber,
    pub total: PageCount,
    pub has_previous: bool,
    pub has_next: bool,
    pub background: Color,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let previous = nav_button(
        "\u{2039}",
        ctx.has_previous.then_some(Message::PreviousPressed),
        ctx.i18n.tr("nav-previous-tooltip"),
    );
    let next = nav_button(
        "\u{203A}",
        ctx.has_next.then_some(Message::NextPressed),
        ctx.i18n.tr("nav-next-tooltip"),
    );

    let current = ctx.current.to_string();
    let total = ctx.total.value().to_string();
    let indicator_label = ctx.i18n.tr_with_args(
        "nav-page-indicator",
        &[("current", current.as_str()), ("total", total.as_str())],
    );
    let indicator = tooltip::Tooltip::new(
        button(text(indicator_label).size(typography::BODY_LG))
            .on_press(Message::IndicatorPressed)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::navigation),
        text(ctx.i18n.tr("nav-page-indicator-tooltip")).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .style(styles::container::tooltip);

    // Previous sits on the left whatever the locale: arrow keys and swipes
    // use the same physical direction.
    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(indicator)
        .push(Space::new().width(Length::Fill))
        .push(next);

    let background = ctx.background;
    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::surface(background))
        .into()
}

fn nav_button(
    glyph: &'static str,
    on_press: Option<Message>,
    hint: String,
) -> Element<'static, Message> {
    let control = button(
        text(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .on_press_maybe(on_press)
    .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::navigation);

    tooltip::Tooltip::new(control, text(hint).size(typography::CAPTION), tooltip::Position::Top)
        .style(styles::container::tooltip)
        .into()
}
