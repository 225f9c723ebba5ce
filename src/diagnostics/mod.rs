// SPDX-License-Identifier: MPL-2.0
//! Per-picker diagnostic event log.
//!
//! Events are kept in a memory-bounded circular buffer and can be exported as
//! TOML for bug reports.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`PickerEvent`]: Timestamped event recorded by the state machine or resolver
//! - [`DiagnosticsLog`]: The per-instance handle both of them write into

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{CollapseReason, PickerEvent, PickerEventKind};

use crate::error::Result;
use serde::Serialize;
use std::time::Instant;

/// Bounded, chronological log of picker events.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: CircularBuffer<PickerEvent>,
    started_at: Instant,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[derive(Serialize)]
struct ExportedEvent<'a> {
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a PickerEventKind,
}

#[derive(Serialize)]
struct ExportedLog<'a> {
    events: Vec<ExportedEvent<'a>>,
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            started_at: Instant::now(),
        }
    }

    pub fn record(&mut self, kind: PickerEventKind) {
        self.events.push(PickerEvent::new(kind));
    }

    /// Events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &PickerEvent> {
        self.events.iter()
    }

    /// Event kinds, oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = &PickerEventKind> {
        self.events.iter().map(|event| &event.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the buffer as `[[events]]` tables with millisecond offsets
    /// from log creation.
    pub fn export_toml(&self) -> Result<String> {
        let events = self
            .events
            .iter()
            .map(|event| ExportedEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis()
                    .try_into()
                    .unwrap_or(u64::MAX),
                kind: &event.kind,
            })
            .collect();
        Ok(toml::to_string(&ExportedLog { events })?)
    }
}
