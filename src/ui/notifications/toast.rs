// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let args: Vec<(&str, &str)> = notification
            .args()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        let message = i18n.tr_with_args(notification.key(), &args);

        let glyph = text(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let dismiss = button(text("\u{2715}").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::ghost);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(text(message).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// All visible toasts stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let toasts = manager
            .visible()
            .map(|notification| Self::view(notification, i18n));

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
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        text_color: Some(base.text),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
