// SPDX-License-Identifier: MPL-2.0
//! Headless picker core.
//!
//! Everything here is independent of the display toolkit: items and their
//! candidate lists, selection ownership, the expansion state machine, scroll
//! affordances and placement geometry. [`crate::ui::layer_picker`] binds it
//! to Iced.

pub mod geometry;
pub mod hover_delay;
pub mod item;
pub mod scroll;
pub mod selection;
pub mod state;
pub mod substrate;
pub mod tiles;

pub use geometry::{PanelSide, Placement, SizeClass, SizeMetrics, XEdge, YEdge};
pub use hover_delay::HoverCloseDelay;
pub use item::{CandidateList, LayerItem};
pub use scroll::{ScrollArrows, ScrollDirection, ScrollMetrics, ScrollMotion};
pub use selection::{Selection, SelectionMode};
pub use state::{Expansion, Notification, PickerOptions, PickerState, Placeholders};
pub use substrate::{
    detect_touch, InputMode, Observation, RecordingSubstrate, Substrate, SubscriptionId,
};
pub use tiles::{TileOptions, TilePlan};
