// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the picker. Constants are organized by category.
//!
//! # Categories
//!
//! - **Placement**: Anchor offsets and gaps
//! - **Panel**: Truncation and hover-close timing
//! - **Scrolling**: Arrow step and smooth-scroll duration
//! - **Thumbnails**: Placeholder image sources
//! - **Diagnostics**: Event log capacity

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Default horizontal offset from the anchored edge (px).
pub const DEFAULT_ANCHOR_X: f32 = 8.0;

/// Default vertical offset from the anchored edge (px).
pub const DEFAULT_ANCHOR_Y: f32 = 32.0;

/// Default gap between the collapsed control and the panel (px).
pub const DEFAULT_PANEL_GAP: f32 = 8.0;

/// Default gap between the panel's far edge and the container edge (px).
pub const DEFAULT_PARENT_GAP: f32 = 8.0;

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Default maximum number of item tiles shown before truncation.
pub const DEFAULT_MAX_VISIBLE: usize = 4;

/// Default delay before a pointer-leave collapses the panel (ms).
pub const DEFAULT_HOVER_CLOSE_DELAY_MS: u64 = 160;

/// Minimum hover-close delay (ms). Zero collapses on the next tick.
pub const MIN_HOVER_CLOSE_DELAY_MS: u64 = 0;

/// Maximum hover-close delay (ms).
pub const MAX_HOVER_CLOSE_DELAY_MS: u64 = 2000;

// ==========================================================================
// Scrolling Defaults
// ==========================================================================

/// Horizontal distance scrolled by one arrow activation (px).
pub const SCROLL_STEP_PX: f32 = 120.0;

/// Tolerance used when deciding whether the end of content is visible (px).
pub const SCROLL_EPSILON_PX: f32 = 1.0;

/// Duration of the smooth scroll animation started by an arrow (ms).
pub const SMOOTH_SCROLL_DURATION_MS: u64 = 180;

/// Gap between tiles inside the tile strip (px).
pub const TILE_GAP: f32 = 8.0;

/// Inner padding of a tile (px).
pub const TILE_PADDING: f32 = 4.0;

/// Inner padding of the expanded panel (px).
pub const PANEL_PADDING: f32 = 8.0;

/// Width of a scroll arrow button (px).
pub const ARROW_WIDTH: f32 = 36.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Image shown on the "Default" tile.
pub const DEFAULT_RESET_IMAGE: &str = "./firstplace.svg";

/// Placeholder used when an item has no usable thumbnail.
pub const DEFAULT_NO_IMAGE: &str = "./noimage.png";

/// Image shown on the "More" tile.
pub const DEFAULT_MORE_IMAGE: &str = "./more-images.png";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept per picker.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;
