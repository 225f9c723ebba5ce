// SPDX-License-Identifier: MPL-2.0
//! Size tiers and placement geometry for the collapsed control and panel.

use crate::config::{
    DEFAULT_ANCHOR_X, DEFAULT_ANCHOR_Y, DEFAULT_PANEL_GAP, DEFAULT_PARENT_GAP, PANEL_PADDING,
    TILE_GAP,
};
use serde::{Deserialize, Serialize};

/// Visual size tier of the picker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    #[default]
    Small,
    Medium,
    Large,
}

/// Fixed pixel dimensions for one size tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    /// Edge length of the square collapsed control.
    pub collapsed: f32,
    /// Width of the thumbnail inside the collapsed control.
    pub thumb: f32,
    /// Width of one tile in the panel.
    pub tile_width: f32,
    /// Width of the thumbnail inside a tile.
    pub tile_thumb: f32,
}

impl SizeMetrics {
    /// Height of the collapsed thumbnail (landscape crop).
    #[must_use]
    pub fn thumb_height(&self) -> f32 {
        self.thumb * 0.714
    }

    /// Height of a tile thumbnail (3:2 crop).
    #[must_use]
    pub fn tile_thumb_height(&self) -> f32 {
        self.tile_thumb * 0.667
    }

    /// Width of a strip of `count` tiles laid out with the standard gap.
    #[must_use]
    pub fn strip_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let count = count as f32;
        count * self.tile_width + (count - 1.0) * TILE_GAP
    }
}

impl SizeClass {
    #[must_use]
    pub fn metrics(self) -> SizeMetrics {
        match self {
            SizeClass::Small => SizeMetrics {
                collapsed: 64.0,
                thumb: 56.0,
                tile_width: 84.0,
                tile_thumb: 72.0,
            },
            SizeClass::Medium => SizeMetrics {
                collapsed: 88.0,
                thumb: 76.0,
                tile_width: 108.0,
                tile_thumb: 96.0,
            },
            SizeClass::Large => SizeMetrics {
                collapsed: 112.0,
                thumb: 96.0,
                tile_width: 140.0,
                tile_thumb: 120.0,
            },
        }
    }
}

/// Horizontal edge the picker is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum XEdge {
    #[default]
    Left,
    Right,
}

/// Vertical edge the picker is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum YEdge {
    Top,
    #[default]
    Bottom,
}

/// Side of the collapsed control the panel opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Right,
    Left,
}

/// Placement of the picker inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub x_edge: XEdge,
    pub y_edge: YEdge,
    pub panel_gap: f32,
    pub parent_gap: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: DEFAULT_ANCHOR_X,
            y: DEFAULT_ANCHOR_Y,
            x_edge: XEdge::default(),
            y_edge: YEdge::default(),
            panel_gap: DEFAULT_PANEL_GAP,
            parent_gap: DEFAULT_PARENT_GAP,
        }
    }
}

impl Placement {
    /// The panel always opens away from the anchored edge.
    #[must_use]
    pub fn panel_side(&self) -> PanelSide {
        match self.x_edge {
            XEdge::Left => PanelSide::Right,
            XEdge::Right => PanelSide::Left,
        }
    }

    /// Maximum panel width for a container of `parent_width`.
    ///
    /// `None` while the container has not been measured. The result keeps
    /// `parent_gap` between the panel's far edge and the container border
    /// wherever the control sits, and never goes negative.
    #[must_use]
    pub fn panel_max_width(&self, metrics: &SizeMetrics, parent_width: Option<f32>) -> Option<f32> {
        parent_width.map(|width| {
            (width - (self.x + metrics.collapsed) - self.panel_gap - self.parent_gap).max(0.0)
        })
    }

    /// Visible width left for the scrollable tile strip once the pinned tiles
    /// and panel padding are taken out of the panel's max width.
    #[must_use]
    pub fn strip_viewport_width(
        &self,
        metrics: &SizeMetrics,
        parent_width: Option<f32>,
        pinned_tiles: usize,
        strip_content: f32,
    ) -> f32 {
        let Some(max) = self.panel_max_width(metrics, parent_width) else {
            return strip_content;
        };
        let pinned = pinned_tiles as f32 * (metrics.tile_width + TILE_GAP);
        (max - 2.0 * PANEL_PADDING - pinned)
            .max(0.0)
            .min(strip_content)
    }
}
