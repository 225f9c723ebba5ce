// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded by a picker instance.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Why the panel collapsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CollapseReason {
    /// Hover-close delay elapsed after the pointer left.
    HoverTimeout,
    /// Pointer-down outside the picker.
    OutsidePointer,
    /// Explicit toggle (tap, click, keyboard).
    Toggle,
    /// An item, the default, or "more" was chosen.
    Action,
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerEventKind {
    Mounted {
        touch: bool,
        controlled: bool,
    },
    Expanded,
    Collapsed {
        reason: CollapseReason,
    },
    ItemSelected {
        id: String,
    },
    DefaultChosen,
    MoreInvoked,
    /// Host pushed a controlled value into a picker that owns its value.
    ControlledValueIgnored,
    CandidateFailed {
        target: String,
        source: String,
        reason: String,
    },
    Resolved {
        target: String,
        source: String,
    },
    Exhausted {
        target: String,
    },
    StaleCompletionDropped {
        target: String,
        generation: u64,
    },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct PickerEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: PickerEventKind,
}

impl PickerEvent {
    #[must_use]
    pub fn new(kind: PickerEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
