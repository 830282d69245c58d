// SPDX-License-Identifier: MPL-2.0
//! Viewport: the page itself, or a placeholder, with the spinner on top.

use super::component::{Content, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::Spinner;
use iced::widget::{center, column, container, svg, text, Stack};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a Content,
    pub is_loading: bool,
    pub spinner_rotation: f32,
    pub colors: &'a ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.content {
        Content::Page(asset) => svg(asset.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Content::Failed(page) => {
            let page = page.to_string();
            placeholder(
                ctx.i18n
                    .tr_with_args("viewer-page-load-error", &[("page", page.as_str())]),
                ctx.colors.placeholder_text,
            )
        }
        Content::Empty if ctx.is_loading => placeholder(String::new(), ctx.colors.placeholder_text),
        Content::Empty => placeholder(ctx.i18n.tr("viewer-empty"), ctx.colors.placeholder_text),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS),
        );

    if ctx.is_loading {
        let indicator = column![
            Spinner::new(ctx.colors.brand_primary, ctx.spinner_rotation).into_element(),
            text(ctx.i18n.tr("viewer-loading")).size(typography::CAPTION),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);
        layers = layers.push(center(indicator));
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface(ctx.colors.viewport_background))
        .into()
}

fn placeholder<'a>(label: String, color: Color) -> Element<'a, Message> {
    center(
        text(label)
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
    )
    .into()
}
