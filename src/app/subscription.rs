// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::keyboard::key::Named;
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

const SPINNER_INTERVAL: Duration = Duration::from_millis(50);
const NOTIFICATION_INTERVAL: Duration = Duration::from_millis(250);

/// Routes native events to the viewer.
///
/// Events already handled by a widget are dropped, except Escape (the page
/// entry field swallows it) and cursor tracking, which the viewer needs to
/// place mouse swipes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window| {
        let always_routed = matches!(
            event,
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(Named::Escape),
                ..
            }) | event::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft)
        );

        match status {
            event::Status::Captured if !always_routed => None,
            _ => Some(Message::Viewer(component::Message::RawEvent { window, event })),
        }
    })
}

/// Spinner animation, only while a page is loading.
pub fn create_spinner_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_INTERVAL).map(|_| Message::Viewer(component::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}

/// Toast expiry, only while there is something to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
