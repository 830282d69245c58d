// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::viewer::component;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the launcher. Each one overrides the
/// matching value of `settings.toml`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Locale requested with `--lang`.
    pub lang: Option<String>,
    /// Positional argument: directory or `http(s)://` base URL of the pages.
    pub asset_root: Option<String>,
    /// Page count requested with `--pages`.
    pub total_pages: Option<u32>,
}
