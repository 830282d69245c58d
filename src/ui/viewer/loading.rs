// SPDX-License-Identifier: MPL-2.0
//! Loading indicator state.
//!
//! Visible for as long as a page fetch is in flight. There is no timeout:
//! a fetch that never settles keeps the spinner turning.

use crate::ui::widgets::spinner;

#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    rotation: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Start,
    Stop,
    Tick,
}

impl State {
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Start => {
                self.is_loading = true;
                self.rotation = 0.0;
            }
            Message::Stop => {
                self.is_loading = false;
                self.rotation = 0.0;
            }
            Message::Tick => {
                if self.is_loading {
                    self.rotation = spinner::advance(self.rotation);
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}
