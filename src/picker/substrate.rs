// SPDX-License-Identifier: MPL-2.0
//! Host capabilities the picker depends on, injected rather than global.
//!
//! The picker asks its host for three things: whether the device is touch
//! capable (probed once at mount), a global pointer-down observation that
//! sees events before inner widgets can swallow them, and scroll/resize
//! observation of the tile strip. The Iced binding lives in
//! [`crate::ui::layer_picker`]; tests use [`RecordingSubstrate`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the picker decides between hover and tap interaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Ask the host at mount.
    #[default]
    Auto,
    /// Force hover interaction.
    Pointer,
    /// Force tap-only interaction.
    Touch,
}

/// A host-side observation the picker can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Observation {
    /// Pointer-down anywhere, observed in capture order.
    OutsidePointerDown,
    /// Scroll offset, size, or content-size changes of the tile strip,
    /// including container resizes.
    ScrollRegion,
}

/// Handle returned by [`Substrate::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

/// Host event/observation capabilities.
pub trait Substrate {
    /// One-time capability probe, called when the picker is mounted.
    fn probe_touch(&self) -> bool;

    /// Starts delivering `observation` to the picker.
    fn subscribe(&mut self, observation: Observation) -> SubscriptionId;

    /// Stops a subscription. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Resolves the configured mode against the host probe.
#[must_use]
pub fn detect_touch<S: Substrate + ?Sized>(mode: InputMode, substrate: &S) -> bool {
    match mode {
        InputMode::Auto => substrate.probe_touch(),
        InputMode::Pointer => false,
        InputMode::Touch => true,
    }
}

/// In-memory substrate that records subscriptions.
///
/// Used by tests and by hosts that route events by hand.
#[derive(Debug, Default, Clone)]
pub struct RecordingSubstrate {
    touch: bool,
    next_id: u64,
    active: BTreeMap<SubscriptionId, Observation>,
    /// Total subscribe calls, including ones later removed.
    pub subscribe_calls: usize,
}

impl RecordingSubstrate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn touch() -> Self {
        Self {
            touch: true,
            ..Self::default()
        }
    }

    /// Whether `observation` currently has a live subscription.
    #[must_use]
    pub fn is_observing(&self, observation: Observation) -> bool {
        self.active.values().any(|o| *o == observation)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Substrate for RecordingSubstrate {
    fn probe_touch(&self) -> bool {
        self.touch
    }

    fn subscribe(&mut self, observation: Observation) -> SubscriptionId {
        self.next_id += 1;
        self.subscribe_calls += 1;
        let id = SubscriptionId(self.next_id);
        self.active.insert(id, observation);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_touch_respects_forced_modes() {
        let touch_host = RecordingSubstrate::touch();
        let pointer_host = RecordingSubstrate::new();

        assert!(detect_touch(InputMode::Auto, &touch_host));
        assert!(!detect_touch(InputMode::Auto, &pointer_host));
        assert!(!detect_touch(InputMode::Pointer, &touch_host));
        assert!(detect_touch(InputMode::Touch, &pointer_host));
    }

    #[test]
    fn recording_substrate_tracks_live_subscriptions() {
        let mut host = RecordingSubstrate::new();
        let id = host.subscribe(Observation::OutsidePointerDown);
        assert!(host.is_observing(Observation::OutsidePointerDown));
        assert!(!host.is_observing(Observation::ScrollRegion));

        host.unsubscribe(id);
        assert_eq!(host.active_count(), 0);
        assert_eq!(host.subscribe_calls, 1);

        // Unknown ids are ignored.
        host.unsubscribe(SubscriptionId(99));
    }
}
