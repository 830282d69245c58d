// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while a page is being fetched.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;
/// Angular length of the moving arc.
const SWEEP: f32 = PI * 0.75;

/// Rotation advanced on every animation tick.
pub const STEP: f32 = 0.3;

/// Advances a rotation angle by one step, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + STEP) % TAU
}

/// Ring with a rotating arc. The caller owns the angle and feeds it back
/// on every frame.
pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = (frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH).max(1.0);

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(Color {
                        a: TRACK_ALPHA,
                        ..self.color
                    }),
            );

            // Angles start at 3 o'clock; shift so rotation 0 begins at the top.
            let start = self.rotation - PI / 2.0;
            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + SWEEP),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_full_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = advance(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
    }

    #[test]
    fn size_overrides_default() {
        let spinner = Spinner::new(Color::WHITE, 0.0).size(24.0);
        assert_eq!(spinner.size, 24.0);
    }
}
