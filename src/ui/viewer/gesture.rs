// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch and mouse drags.

/// Navigation implied by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer travelled toward the left edge.
    Next,
    /// Pointer travelled toward the right edge.
    Previous,
}

/// Tracks one gesture at a time, from press to release.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    threshold: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    /// Records where the pointer went down. A second `begin` restarts the gesture.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finishes the gesture at `x`.
    ///
    /// Displacement must be strictly larger than the threshold; anything
    /// shorter reads as a tap.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let travelled = start - x;

        if travelled > self.threshold {
            Some(SwipeDirection::Next)
        } else if -travelled > self.threshold {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
