// SPDX-License-Identifier: MPL-2.0
//! Direct page entry dialog.
//!
//! Opened from the page indicator or the `g` key. The text field starts out
//! holding the current page, fully selected, so typing replaces it.

use crate::document::{PageCount, PageNumber};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, column, container, mouse_area, opaque, operation, row, text, text_input,
    tooltip, Id, Space,
};
use iced::{alignment, Element, Length, Task};

/// Widget id of the page number field.
pub const INPUT_ID: &str = "page-entry-input";

#[derive(Debug, Clone, Default)]
pub struct State {
    is_open: bool,
    text: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// Go button or Enter in the field.
    Confirm,
    /// Close button, Escape or a click on the backdrop.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked to jump to whatever is in the field.
    Submit(String),
}

impl State {
    /// Shows the dialog seeded with `current`, focusing and selecting the field.
    ///
    /// Does nothing when already open so a repeated shortcut keeps the text
    /// the user is typing.
    pub fn open(&mut self, current: PageNumber) -> Task<Message> {
        if self.is_open {
            return Task::none();
        }
        self.is_open = true;
        self.text = current.to_string();

        Task::batch([
            operation::focus(Id::new(INPUT_ID)),
            operation::select_all(Id::new(INPUT_ID)),
        ])
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Replaces the field content with `page`.
    pub fn reset(&mut self, page: PageNumber) {
        self.text = page.to_string();
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::InputChanged(value) => {
                self.text = value;
                Effect::None
            }
            Message::Confirm if self.is_open => Effect::Submit(self.text.clone()),
            Message::Confirm => Effect::None,
            Message::Cancel => {
                self.close();
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Backdrop plus dialog, meant to be stacked over the viewer.
    /// `None` while closed.
    pub fn view(&self, i18n: &I18n, total: PageCount) -> Option<Element<'_, Message>> {
        if !self.is_open {
            return None;
        }

        let header = row![
            text(i18n.tr("page-entry-title")).size(typography::TITLE_MD),
            Space::new().width(Length::Fill),
            tooltip::Tooltip::new(
                button(text("\u{2715}").size(typography::BODY))
                    .on_press(Message::Cancel)
                    .padding(spacing::XXS)
                    .style(styles::button::ghost),
                text(i18n.tr("page-entry-close")).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
            .style(styles::container::tooltip),
        ]
        .align_y(alignment::Vertical::Center);

        let input = text_input(&i18n.tr("page-entry-placeholder"), &self.text)
            .id(Id::new(INPUT_ID))
            .on_input(Message::InputChanged)
            .on_submit(Message::Confirm)
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let max = total.value().to_string();
        let hint = text(i18n.tr_with_args("page-entry-hint", &[("max", max.as_str())]))
            .size(typography::CAPTION);

        let go = button(text(i18n.tr("page-entry-go")).size(typography::BODY))
            .on_press(Message::Confirm)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let dialog = container(
            column![header, row![input, go].spacing(spacing::XS), hint]
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Left),
        )
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::dialog);

        Some(opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
                .on_press(Message::Cancel),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: i64) -> PageNumber {
        PageCount::new(604).page(n).unwrap()
    }

    #[test]
    fn open_seeds_text_with_current_page() {
        let mut state = State::default();
        let _ = state.open(page(12));
        assert!(state.is_open());
        assert_eq!(state.text(), "12");
    }

    #[test]
    fn reopening_keeps_typed_text() {
        let mut state = State::default();
        let _ = state.open(page(12));
        state.handle(Message::InputChanged("30".into()));
        let _ = state.open(page(12));
        assert_eq!(state.text(), "30");
    }

    #[test]
    fn confirm_submits_current_text() {
        let mut state = State::default();
        let _ = state.open(page(1));
        state.handle(Message::InputChanged(" 77 ".into()));
        assert_eq!(
            state.handle(Message::Confirm),
            Effect::Submit(" 77 ".to_string())
        );
    }

    #[test]
    fn confirm_while_closed_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Confirm), Effect::None);
    }

    #[test]
    fn cancel_closes() {
        let mut state = State::default();
        let _ = state.open(page(3));
        assert_eq!(state.handle(Message::Cancel), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn view_is_hidden_while_closed() {
        let state = State::default();
        let i18n = I18n::default();
        assert!(state.view(&i18n, PageCount::new(604)).is_none());
    }

    #[test]
    fn reset_replaces_text() {
        let mut state = State::default();
        let _ = state.open(page(3));
        state.handle(Message::InputChanged("abc".into()));
        state.reset(page(3));
        assert_eq!(state.text(), "3");
    }
}
