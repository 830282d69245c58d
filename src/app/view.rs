// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ColorScheme;
use crate::ui::viewer::component::{self, ViewEnv};
use iced::widget::Stack;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    pub notifications: &'a notifications::Manager,
    pub colors: &'a ColorScheme,
}

/// Viewer with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer = ctx
        .viewer
        .view(ViewEnv {
            i18n: ctx.i18n,
            colors: ctx.colors,
        })
        .map(Message::Viewer);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(viewer)
        .push(toasts)
        .into()
}
