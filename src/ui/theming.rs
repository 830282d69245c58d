// SPDX-License-Identifier: MPL-2.0
//! Theme selection and the colors derived from it.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the viewer chrome for a given theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Backdrop behind the page.
    pub viewport_background: Color,
    /// Text of the empty state and load error placeholder.
    pub placeholder_text: Color,
    /// Navigation bar background.
    pub chrome_background: Color,
    /// Spinner accent.
    pub brand_primary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            viewport_background: palette::GRAY_100,
            placeholder_text: palette::GRAY_400,
            chrome_background: palette::WHITE,
            brand_primary: palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            viewport_background: Color::from_rgb(0.15, 0.15, 0.15),
            placeholder_text: palette::GRAY_200,
            chrome_background: palette::GRAY_900,
            brand_primary: palette::PRIMARY_400,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced built-in theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
