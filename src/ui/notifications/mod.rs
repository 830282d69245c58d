// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Failures that the viewer cannot show inline (a rejected page number, an
//! unreadable settings file) and page load failures are reported as toasts
//! in the bottom-right corner. At most three are visible; the rest wait in
//! a queue. Warnings fade after a few seconds, errors stay until dismissed
//! or until a later page load succeeds.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, LOAD_ERROR_PREFIX};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
