// SPDX-License-Identifier: MPL-2.0
//! Hover-close delay domain type.
//!
//! This module provides a type-safe wrapper for the delay between the pointer
//! leaving the picker and the panel collapsing.

use crate::config::{
    DEFAULT_HOVER_CLOSE_DELAY_MS, MAX_HOVER_CLOSE_DELAY_MS, MIN_HOVER_CLOSE_DELAY_MS,
};
use std::time::Duration;

/// Hover-close delay in milliseconds.
///
/// # Example
///
/// ```
/// use layer_picker::picker::HoverCloseDelay;
///
/// let delay = HoverCloseDelay::new(250);
/// assert_eq!(delay.value(), 250);
///
/// // Values outside range are clamped
/// let too_long = HoverCloseDelay::new(60_000);
/// assert_eq!(too_long.value(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverCloseDelay(u64);

impl HoverCloseDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_HOVER_CLOSE_DELAY_MS, MAX_HOVER_CLOSE_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HoverCloseDelay {
    fn default() -> Self {
        Self(DEFAULT_HOVER_CLOSE_DELAY_MS)
    }
}
