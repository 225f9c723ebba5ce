// SPDX-License-Identifier: MPL-2.0
//! Scroll affordances (left/right arrows) and smooth arrow scrolling for the
//! tile strip.

use crate::config::{SCROLL_EPSILON_PX, SCROLL_STEP_PX, SMOOTH_SCROLL_DURATION_MS};
use std::time::{Duration, Instant};

/// Direction of an arrow activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn sign(self) -> f32 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

/// Last known geometry of the horizontal tile strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Horizontal scroll offset.
    pub offset: f32,
    /// Width of the visible part of the strip.
    pub viewport_width: f32,
    /// Full width of the strip content.
    pub content_width: f32,
}

/// Which arrows should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollArrows {
    pub left: bool,
    pub right: bool,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(offset: f32, viewport_width: f32, content_width: f32) -> Self {
        Self {
            offset,
            viewport_width,
            content_width,
        }
    }

    /// Largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Left arrow iff scrolled away from the start; right arrow iff the end of
    /// content is not yet revealed (within the sub-pixel epsilon).
    #[must_use]
    pub fn arrows(&self) -> ScrollArrows {
        ScrollArrows {
            left: self.offset > 0.0,
            right: self.offset + self.viewport_width < self.content_width - SCROLL_EPSILON_PX,
        }
    }

    /// Target offset after one arrow step, clamped to the content.
    #[must_use]
    pub fn step_target(&self, direction: ScrollDirection) -> f32 {
        (self.offset + direction.sign() * SCROLL_STEP_PX).clamp(0.0, self.max_offset())
    }
}

/// An in-flight smooth scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMotion {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollMotion {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: Duration::from_millis(SMOOTH_SCROLL_DURATION_MS),
        }
    }

    /// Offset at `now` using an ease-out cubic curve, and whether the motion
    /// has finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}
