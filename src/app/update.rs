// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! The viewer reports what happened through [`component::Effect`]; this
//! module turns those outcomes into toasts.

use super::Message;
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer::component::{self, Effect};
use iced::Task;
use std::time::Instant;

/// Forwards a message to the viewer and reacts to its effect.
pub fn handle_viewer_message(
    viewer: &mut component::State,
    notifications: &mut notifications::Manager,
    message: component::Message,
) -> Task<Message> {
    let (effect, task) = viewer.handle_message(message);
    apply_viewer_effect(notifications, effect);
    task.map(Message::Viewer)
}

pub fn handle_notification_message(
    notifications: &mut notifications::Manager,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    notifications.handle_message(message);
    Task::none()
}

pub fn handle_tick(notifications: &mut notifications::Manager, now: Instant) -> Task<Message> {
    notifications.tick(now);
    Task::none()
}

fn apply_viewer_effect(notifications: &mut notifications::Manager, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::PageLoaded(_) => notifications.clear_load_errors(),
        Effect::PageLoadFailed(page) => notifications.push(
            Notification::error("notification-load-error-page").with_arg("page", page),
        ),
        Effect::PageOutOfRange { min, max } => notifications.push(
            Notification::warning("notification-page-out-of-range")
                .with_arg("min", min)
                .with_arg("max", max),
        ),
    }
}
