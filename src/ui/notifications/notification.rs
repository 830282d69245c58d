// SPDX-License-Identifier: MPL-2.0
//! A single user-facing notice.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const WARNING_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejected input or degraded setup. Fades on its own.
    Warning,
    /// Failed page load. Stays until dismissed or superseded.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph drawn at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Warning => "!",
            Severity::Error => "\u{2715}",
        }
    }

    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(WARNING_LIFETIME),
            Severity::Error => None,
        }
    }
}

/// Notice carrying an i18n key and its arguments; text is resolved when
/// rendered so a locale switch applies to pending toasts too.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Whether the notice has outlived its severity's lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.created_at) >= lifetime)
    }
}
