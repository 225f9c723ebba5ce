// SPDX-License-Identifier: MPL-2.0
//! Which tiles the expanded panel shows.

use super::item::LayerItem;
use std::num::NonZeroUsize;

/// Truncation and affordance options for the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOptions {
    /// Maximum number of item tiles; `None` disables truncation.
    pub max_visible: Option<NonZeroUsize>,
    /// The host handles "more".
    pub more_handler: bool,
    /// Show the "more" tile even when nothing was truncated.
    pub always_show_more: bool,
    /// Show the pinned "default" tile.
    pub default_tile: bool,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            max_visible: NonZeroUsize::new(crate::config::DEFAULT_MAX_VISIBLE),
            more_handler: false,
            always_show_more: false,
            default_tile: true,
        }
    }
}

/// Resolved tile layout for one item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlan {
    /// Number of leading items rendered as tiles.
    pub visible: usize,
    /// At least one item was cut off.
    pub truncated: bool,
    pub show_more: bool,
    pub show_default: bool,
}

impl TilePlan {
    #[must_use]
    pub fn new(item_count: usize, options: &TileOptions) -> Self {
        let visible = options
            .max_visible
            .map_or(item_count, |max| item_count.min(max.get()));
        let truncated = visible < item_count;
        Self {
            visible,
            truncated,
            show_more: options.more_handler && (truncated || options.always_show_more),
            show_default: options.default_tile,
        }
    }

    /// The leading items that render as tiles, in input order.
    #[must_use]
    pub fn visible_items<'a>(&self, items: &'a [LayerItem]) -> &'a [LayerItem] {
        &items[..self.visible.min(items.len())]
    }

    /// Whether the panel has anything to show; toggling is a no-op otherwise.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.visible > 0 || self.show_default || self.show_more
    }

    /// Tiles pinned outside the scrollable strip.
    #[must_use]
    pub fn pinned_tiles(&self) -> usize {
        usize::from(self.show_default) + usize::from(self.show_more)
    }
}
