// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Flat colored surface (navigation bar, viewport backdrop).
pub fn surface(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Dimmed layer behind the page entry dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Card holding the page entry dialog.
pub fn dialog(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the theme background for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (background, text) = if is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..background
        })),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn tooltip_contrasts_with_theme() {
        let on_light = tooltip(&Theme::Light).text_color;
        let on_dark = tooltip(&Theme::Dark).text_color;
        assert_ne!(on_light, on_dark);
    }

    #[test]
    fn dialog_has_rounded_border() {
        let style = dialog(&Theme::Dark);
        assert!(style.border.width > 0.0);
        assert!(style.shadow.blur_radius > 0.0);
    }
}
