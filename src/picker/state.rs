// SPDX-License-Identifier: MPL-2.0
//! Selection and expansion state machine for one picker instance.
//!
//! [`PickerState`] is the owned, explicitly scoped record behind a picker:
//! selection ownership, the expansion flag, the single-slot hover-close
//! deadline, scroll affordances and the diagnostics log. Every input is a
//! method call; every callback the host should fire comes back as a
//! [`Notification`], in the order it happened, from the same call.
//!
//! Time never advances on its own. Pointer-leave arms a deadline and the host
//! drives it with [`PickerState::tick`], which keeps the machine fully
//! deterministic under test.

use super::geometry::{Placement, SizeClass, SizeMetrics};
use super::hover_delay::HoverCloseDelay;
use super::item::{CandidateList, LayerItem};
use super::scroll::{ScrollArrows, ScrollDirection, ScrollMetrics, ScrollMotion};
use super::selection::{Selection, SelectionMode};
use super::substrate::{detect_touch, InputMode, Observation, Substrate, SubscriptionId};
use super::tiles::{TileOptions, TilePlan};
use crate::config::{DEFAULT_MORE_IMAGE, DEFAULT_NO_IMAGE, DEFAULT_RESET_IMAGE};
use crate::diagnostics::{BufferCapacity, CollapseReason, DiagnosticsLog, PickerEventKind};
use crate::media::{RenderContext, RenderTarget};
use std::time::Instant;

/// Placeholder image sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    /// Image of the default tile.
    pub default_thumb: String,
    /// Last candidate of every list.
    pub no_image_thumb: String,
    /// Image of the more tile.
    pub more_thumb: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            default_thumb: DEFAULT_RESET_IMAGE.to_string(),
            no_image_thumb: DEFAULT_NO_IMAGE.to_string(),
            more_thumb: DEFAULT_MORE_IMAGE.to_string(),
        }
    }
}

/// Construction-time configuration of a picker.
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    pub selection: SelectionMode,
    /// Passed back with [`Notification::DefaultChosen`].
    pub default_item: Option<LayerItem>,
    pub input_mode: InputMode,
    pub hover_close_delay: HoverCloseDelay,
    pub tiles: TileOptions,
    pub placement: Placement,
    pub size: SizeClass,
    pub placeholders: Placeholders,
    pub diagnostics_capacity: BufferCapacity,
}

/// Expansion state of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

/// A host callback to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Selected(LayerItem),
    DefaultChosen(Option<LayerItem>),
    More,
    Expanded,
    Collapsed,
}

/// Per-instance picker state.
#[derive(Debug)]
pub struct PickerState<S: Substrate> {
    items: Vec<LayerItem>,
    selection: Selection,
    default_item: Option<LayerItem>,
    expansion: Expansion,
    touch: bool,
    hover_close_delay: HoverCloseDelay,
    close_deadline: Option<Instant>,
    tile_options: TileOptions,
    plan: TilePlan,
    placement: Placement,
    size: SizeClass,
    placeholders: Placeholders,
    parent_width: Option<f32>,
    measured_scroll: Option<ScrollMetrics>,
    scroll_motion: Option<ScrollMotion>,
    subscriptions: Vec<SubscriptionId>,
    substrate: S,
    log: DiagnosticsLog,
}

impl<S: Substrate> PickerState<S> {
    /// Mounts a picker: resolves selection ownership and probes the host for
    /// touch input once.
    pub fn new(items: Vec<LayerItem>, options: PickerOptions, substrate: S) -> Self {
        let touch = detect_touch(options.input_mode, &substrate);
        let selection = Selection::from_mode(options.selection, &items);
        let plan = TilePlan::new(items.len(), &options.tiles);

        let mut log = DiagnosticsLog::new(options.diagnostics_capacity);
        log.record(PickerEventKind::Mounted {
            touch,
            controlled: selection.is_controlled(),
        });

        Self {
            items,
            selection,
            default_item: options.default_item,
            expansion: Expansion::Collapsed,
            touch,
            hover_close_delay: options.hover_close_delay,
            close_deadline: None,
            tile_options: options.tiles,
            plan,
            placement: options.placement,
            size: options.size,
            placeholders: options.placeholders,
            parent_width: None,
            measured_scroll: None,
            scroll_motion: None,
            subscriptions: Vec::new(),
            substrate,
            log,
        }
    }

    // ---------------------------------------------------------------------
    // Pointer and activation input
    // ---------------------------------------------------------------------

    /// Pointer entered the picker. Ignored on touch hardware.
    pub fn pointer_entered(&mut self) -> Vec<Notification> {
        if self.touch {
            return Vec::new();
        }
        self.close_deadline = None;
        self.expand()
    }

    /// Pointer left the picker: arms the hover-close deadline, replacing any
    /// earlier one. Ignored on touch hardware.
    pub fn pointer_left(&mut self, now: Instant) {
        if self.touch || !self.is_expanded() {
            return;
        }
        self.close_deadline = Some(now + self.hover_close_delay.as_duration());
    }

    /// Explicit activation (click, tap, keyboard) of the collapsed control.
    pub fn toggle(&mut self) -> Vec<Notification> {
        self.close_deadline = None;
        match self.expansion {
            Expansion::Collapsed => self.expand(),
            Expansion::Expanded => self.collapse(CollapseReason::Toggle),
        }
    }

    /// A pointer-down landed outside the picker's bounds.
    pub fn outside_pointer_down(&mut self) -> Vec<Notification> {
        self.collapse(CollapseReason::OutsidePointer)
    }

    /// Advances time: fires an expired hover-close deadline and steps any
    /// smooth scroll. Returns the callbacks to fire and, while a scroll is in
    /// motion, the offset the strip should be moved to.
    pub fn tick(&mut self, now: Instant) -> (Vec<Notification>, Option<f32>) {
        let mut notifications = Vec::new();
        if self.close_deadline.is_some_and(|deadline| now >= deadline) {
            self.close_deadline = None;
            notifications = self.collapse(CollapseReason::HoverTimeout);
        }

        let mut scroll_to = None;
        if let Some(motion) = self.scroll_motion {
            let (offset, finished) = motion.sample(now);
            if finished {
                self.scroll_motion = None;
            }
            scroll_to = Some(offset);
        }

        (notifications, scroll_to)
    }

    /// Whether the host needs to keep calling [`tick`](Self::tick).
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.close_deadline.is_some() || self.scroll_motion.is_some()
    }

    // ---------------------------------------------------------------------
    // Selection actions
    // ---------------------------------------------------------------------

    /// Selects a visible item tile. Unknown or truncated ids are ignored.
    pub fn select_item(&mut self, id: &str) -> Vec<Notification> {
        let Some(item) = self
            .plan
            .visible_items(&self.items)
            .iter()
            .find(|item| item.id == id)
            .cloned()
        else {
            return Vec::new();
        };

        self.selection.select(&item.id);
        self.log
            .record(PickerEventKind::ItemSelected { id: item.id.clone() });

        let mut notifications = vec![Notification::Selected(item)];
        notifications.extend(self.collapse(CollapseReason::Action));
        notifications
    }

    /// Activates the default tile.
    pub fn choose_default(&mut self) -> Vec<Notification> {
        if !self.plan.show_default {
            return Vec::new();
        }
        self.log.record(PickerEventKind::DefaultChosen);

        let mut notifications = vec![Notification::DefaultChosen(self.default_item.clone())];
        notifications.extend(self.collapse(CollapseReason::Action));
        notifications
    }

    /// Activates the more tile.
    pub fn invoke_more(&mut self) -> Vec<Notification> {
        if !self.plan.show_more {
            return Vec::new();
        }
        self.log.record(PickerEventKind::MoreInvoked);

        let mut notifications = vec![Notification::More];
        notifications.extend(self.collapse(CollapseReason::Action));
        notifications
    }

    // ---------------------------------------------------------------------
    // Host-driven changes
    // ---------------------------------------------------------------------

    /// The host supplies a new controlled value. Returns `false` when this
    /// picker owns its value; the call is then ignored and logged.
    pub fn set_controlled_value(&mut self, value: Option<String>) -> bool {
        let accepted = self.selection.sync_external(value);
        if !accepted {
            self.log.record(PickerEventKind::ControlledValueIgnored);
        }
        accepted
    }

    /// Imperatively sets the selection, whichever mode is active.
    pub fn force_select(&mut self, id: impl Into<String>) {
        self.selection.force(Some(id.into()));
    }

    /// Clears an owned selection. Returns whether anything changed.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    /// Replaces the item list. An open panel left with nothing to show
    /// collapses, and the returned callbacks report it.
    pub fn set_items(&mut self, items: Vec<LayerItem>) -> Vec<Notification> {
        self.items = items;
        self.plan = TilePlan::new(self.items.len(), &self.tile_options);
        if self.plan.has_content() {
            Vec::new()
        } else {
            self.collapse(CollapseReason::Action)
        }
    }

    /// Latest measured width of the container, `None` if unknown.
    pub fn set_parent_width(&mut self, width: Option<f32>) {
        self.parent_width = width;
        let estimate = self.estimated_scroll();
        if let Some(measured) = self.measured_scroll.as_mut() {
            measured.viewport_width = estimate.viewport_width;
        }
    }

    /// The scroll region reported new offset, viewport or content size.
    pub fn scroll_changed(&mut self, metrics: ScrollMetrics) {
        self.measured_scroll = Some(metrics);
    }

    /// Starts a smooth scroll one step in `direction`. Does not change
    /// expansion.
    pub fn scroll_arrow(&mut self, direction: ScrollDirection, now: Instant) {
        let current = match self.scroll_motion {
            Some(motion) => motion.sample(now).0,
            None => self.scroll_metrics().offset,
        };
        let metrics = ScrollMetrics {
            offset: current,
            ..self.scroll_metrics()
        };
        let target = metrics.step_target(direction);
        if (target - current).abs() > f32::EPSILON {
            self.scroll_motion = Some(ScrollMotion::new(current, target, now));
        }
    }

    /// Releases host subscriptions and pending timers. Also runs on drop.
    pub fn unmount(&mut self) {
        self.close_deadline = None;
        self.scroll_motion = None;
        self.release_observations();
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    fn expand(&mut self) -> Vec<Notification> {
        if self.is_expanded() || !self.plan.has_content() {
            return Vec::new();
        }
        self.expansion = Expansion::Expanded;
        self.subscriptions.push(
            self.substrate
                .subscribe(Observation::OutsidePointerDown),
        );
        self.subscriptions
            .push(self.substrate.subscribe(Observation::ScrollRegion));
        self.log.record(PickerEventKind::Expanded);
        vec![Notification::Expanded]
    }

    fn collapse(&mut self, reason: CollapseReason) -> Vec<Notification> {
        self.close_deadline = None;
        if !self.is_expanded() {
            return Vec::new();
        }
        self.expansion = Expansion::Collapsed;
        self.scroll_motion = None;
        self.measured_scroll = None;
        self.release_observations();
        self.log.record(PickerEventKind::Collapsed { reason });
        vec![Notification::Collapsed]
    }

    fn release_observations(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.substrate.unsubscribe(id);
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &[LayerItem] {
        &self.items
    }

    #[must_use]
    pub fn visible_items(&self) -> &[LayerItem] {
        self.plan.visible_items(&self.items)
    }

    #[must_use]
    pub fn plan(&self) -> TilePlan {
        self.plan
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&LayerItem> {
        self.selection.resolve(&self.items)
    }

    /// Tooltip of the collapsed control.
    #[must_use]
    pub fn tooltip(&self) -> Option<String> {
        self.selected_item().map(LayerItem::tooltip)
    }

    #[must_use]
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expansion == Expansion::Expanded
    }

    #[must_use]
    pub fn is_touch(&self) -> bool {
        self.touch
    }

    #[must_use]
    pub fn close_deadline(&self) -> Option<Instant> {
        self.close_deadline
    }

    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[must_use]
    pub fn size(&self) -> SizeClass {
        self.size
    }

    #[must_use]
    pub fn metrics(&self) -> SizeMetrics {
        self.size.metrics()
    }

    #[must_use]
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    #[must_use]
    pub fn panel_max_width(&self) -> Option<f32> {
        self.placement
            .panel_max_width(&self.metrics(), self.parent_width)
    }

    /// Measured scroll geometry, or an estimate from the size class until the
    /// scroll region has reported.
    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        self.measured_scroll
            .unwrap_or_else(|| self.estimated_scroll())
    }

    /// Width the tile strip is drawn at for the current container width.
    #[must_use]
    pub fn strip_viewport_width(&self) -> f32 {
        self.estimated_scroll().viewport_width
    }

    fn estimated_scroll(&self) -> ScrollMetrics {
        let metrics = self.metrics();
        let content = metrics.strip_width(self.plan.visible);
        let viewport = self.placement.strip_viewport_width(
            &metrics,
            self.parent_width,
            self.plan.pinned_tiles(),
            content,
        );
        ScrollMetrics::new(0.0, viewport, content)
    }

    #[must_use]
    pub fn arrows(&self) -> ScrollArrows {
        self.scroll_metrics().arrows()
    }

    /// Every image target currently rendered, with the inputs its resolution
    /// depends on.
    #[must_use]
    pub fn render_contexts(&self) -> Vec<(RenderTarget, RenderContext)> {
        let expanded = self.is_expanded();
        let no_image = self.placeholders.no_image_thumb.as_str();
        let fixed = |source: &str| {
            if expanded {
                CandidateList::from_sources(vec![source.to_string(), no_image.to_string()])
            } else {
                CandidateList::single(source)
            }
        };

        let mut contexts = Vec::with_capacity(self.plan.visible + 3);
        contexts.push((
            RenderTarget::Collapsed,
            RenderContext::new(CandidateList::collapsed(self.selected_item(), no_image), false),
        ));
        if self.plan.show_default {
            contexts.push((
                RenderTarget::DefaultTile,
                RenderContext::new(fixed(&self.placeholders.default_thumb), expanded),
            ));
        }
        for item in self.visible_items() {
            let candidates = if expanded {
                CandidateList::expanded(Some(item), no_image)
            } else {
                CandidateList::collapsed(Some(item), no_image)
            };
            contexts.push((
                RenderTarget::Tile(item.id.clone()),
                RenderContext::new(candidates, expanded),
            ));
        }
        if self.plan.show_more {
            contexts.push((
                RenderTarget::MoreTile,
                RenderContext::new(fixed(&self.placeholders.more_thumb), expanded),
            ));
        }
        contexts
    }

    #[must_use]
    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.log
    }

    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticsLog {
        &mut self.log
    }
}

impl<S: Substrate> Drop for PickerState<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::substrate::RecordingSubstrate;
    use std::time::Duration;

    fn sample_items(n: usize) -> Vec<LayerItem> {
        (0..n)
            .map(|i| {
                LayerItem::new(format!("layer-{i}"), format!("Layer {i}"))
                    .with_thumbnail(format!("layer-{i}.jpg"))
            })
            .collect()
    }

    fn picker(items: Vec<LayerItem>, options: PickerOptions) -> PickerState<RecordingSubstrate> {
        PickerState::new(items, options, RecordingSubstrate::new())
    }

    fn with_more() -> PickerOptions {
        PickerOptions {
            tiles: TileOptions {
                more_handler: true,
                ..TileOptions::default()
            },
            ..PickerOptions::default()
        }
    }

    #[test]
    fn hover_enter_expands_and_subscribes() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        assert_eq!(state.pointer_entered(), vec![Notification::Expanded]);
        assert!(state.is_expanded());
        assert!(state.substrate().is_observing(Observation::OutsidePointerDown));
        assert!(state.substrate().is_observing(Observation::ScrollRegion));

        // Already expanded: no duplicate callback.
        assert!(state.pointer_entered().is_empty());
    }

    #[test]
    fn hover_leave_collapses_after_delay() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        let t0 = Instant::now();
        state.pointer_entered();
        state.pointer_left(t0);

        let (early, _) = state.tick(t0 + Duration::from_millis(159));
        assert!(early.is_empty());
        assert!(state.is_expanded());

        let (late, _) = state.tick(t0 + Duration::from_millis(160));
        assert_eq!(late, vec![Notification::Collapsed]);
        assert!(!state.is_expanded());
        assert_eq!(state.substrate().active_count(), 0);
    }

    #[test]
    fn re_enter_cancels_pending_collapse() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        let t0 = Instant::now();
        state.pointer_entered();
        state.pointer_left(t0);
        state.pointer_entered();

        let (notifications, _) = state.tick(t0 + Duration::from_secs(5));
        assert!(notifications.is_empty());
        assert!(state.is_expanded());
        assert!(!state.needs_ticks());
    }

    #[test]
    fn repeated_leave_replaces_deadline() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        let t0 = Instant::now();
        state.pointer_entered();
        state.pointer_left(t0);
        state.pointer_left(t0 + Duration::from_millis(100));

        let (notifications, _) = state.tick(t0 + Duration::from_millis(200));
        assert!(notifications.is_empty());
        let (notifications, _) = state.tick(t0 + Duration::from_millis(260));
        assert_eq!(notifications, vec![Notification::Collapsed]);
    }

    #[test]
    fn touch_ignores_hover_but_toggles() {
        let mut state = PickerState::new(
            sample_items(2),
            PickerOptions::default(),
            RecordingSubstrate::touch(),
        );
        assert!(state.is_touch());
        assert!(state.pointer_entered().is_empty());
        assert!(!state.is_expanded());

        assert_eq!(state.toggle(), vec![Notification::Expanded]);
        state.pointer_left(Instant::now());
        assert!(state.close_deadline().is_none());
    }

    #[test]
    fn toggle_without_content_is_noop() {
        let options = PickerOptions {
            tiles: TileOptions {
                default_tile: false,
                ..TileOptions::default()
            },
            ..PickerOptions::default()
        };
        let mut state = picker(Vec::new(), options);
        assert!(state.toggle().is_empty());
        assert!(!state.is_expanded());
    }

    #[test]
    fn default_tile_alone_counts_as_content() {
        let mut state = picker(Vec::new(), PickerOptions::default());
        assert_eq!(state.toggle(), vec![Notification::Expanded]);
    }

    #[test]
    fn selecting_collapses_immediately_and_updates_owned_value() {
        let mut state = picker(sample_items(3), PickerOptions::default());
        state.pointer_entered();

        let notifications = state.select_item("layer-2");
        assert!(matches!(&notifications[0], Notification::Selected(item) if item.id == "layer-2"));
        assert_eq!(notifications[1], Notification::Collapsed);
        assert_eq!(state.selection().current(), Some("layer-2"));
        assert!(!state.needs_ticks());
    }

    #[test]
    fn controlled_select_fires_callback_without_changing_value() {
        let options = PickerOptions {
            selection: SelectionMode::Controlled(Some("layer-0".into())),
            ..PickerOptions::default()
        };
        let mut state = picker(sample_items(3), options);
        state.toggle();

        let notifications = state.select_item("layer-1");
        assert!(matches!(&notifications[0], Notification::Selected(item) if item.id == "layer-1"));
        assert_eq!(state.selection().current(), Some("layer-0"));

        assert!(state.set_controlled_value(Some("layer-1".into())));
        assert_eq!(state.selection().current(), Some("layer-1"));
    }

    #[test]
    fn controlled_value_ignored_when_uncontrolled() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        assert!(!state.set_controlled_value(Some("layer-1".into())));
        assert_eq!(state.selection().current(), Some("layer-0"));
        assert!(state
            .diagnostics()
            .kinds()
            .any(|k| matches!(k, PickerEventKind::ControlledValueIgnored)));
    }

    #[test]
    fn force_select_overrides_either_mode() {
        let options = PickerOptions {
            selection: SelectionMode::Controlled(None),
            ..PickerOptions::default()
        };
        let mut state = picker(sample_items(2), options);
        state.force_select("layer-1");
        assert_eq!(state.selected_item().map(|it| it.id.as_str()), Some("layer-1"));
    }

    #[test]
    fn truncated_items_cannot_be_selected() {
        let mut state = picker(sample_items(6), with_more());
        state.toggle();
        assert_eq!(state.visible_items().len(), 4);
        assert!(state.select_item("layer-5").is_empty());
        assert!(state.is_expanded());
    }

    #[test]
    fn more_and_default_collapse_and_notify() {
        let default_item = LayerItem::new("base", "Base map");
        let mut state = picker(
            sample_items(6),
            PickerOptions {
                default_item: Some(default_item.clone()),
                ..with_more()
            },
        );

        state.toggle();
        assert_eq!(
            state.invoke_more(),
            vec![Notification::More, Notification::Collapsed]
        );

        state.toggle();
        assert_eq!(
            state.choose_default(),
            vec![
                Notification::DefaultChosen(Some(default_item)),
                Notification::Collapsed
            ]
        );
        assert_eq!(state.selection().current(), Some("layer-0"));
    }

    #[test]
    fn more_is_unavailable_without_handler() {
        let mut state = picker(sample_items(6), PickerOptions::default());
        state.toggle();
        assert!(state.invoke_more().is_empty());
        assert!(state.is_expanded());
    }

    #[test]
    fn outside_pointer_down_collapses_and_clears_timer() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        state.pointer_entered();
        state.pointer_left(Instant::now());
        assert_eq!(state.outside_pointer_down(), vec![Notification::Collapsed]);
        assert!(state.close_deadline().is_none());
        assert!(state.outside_pointer_down().is_empty());
    }

    #[test]
    fn subscriptions_are_released_on_every_collapse() {
        let mut state = picker(sample_items(2), PickerOptions::default());
        for _ in 0..3 {
            state.toggle();
            state.toggle();
        }
        assert_eq!(state.substrate().subscribe_calls, 6);
        assert_eq!(state.substrate().active_count(), 0);
    }

    #[test]
    fn arrow_scroll_moves_smoothly_to_step_target() {
        let mut state = picker(sample_items(8), PickerOptions::default());
        state.toggle();
        state.scroll_changed(ScrollMetrics::new(0.0, 200.0, 700.0));
        assert_eq!(
            state.arrows(),
            ScrollArrows {
                left: false,
                right: true
            }
        );

        let t0 = Instant::now();
        state.scroll_arrow(ScrollDirection::Right, t0);
        assert!(state.is_expanded());

        let (_, mid) = state.tick(t0 + Duration::from_millis(60));
        let mid = mid.expect("scroll in motion");
        assert!(mid > 0.0 && mid < 120.0);

        let (_, end) = state.tick(t0 + Duration::from_secs(1));
        assert_eq!(end, Some(120.0));
        assert!(!state.needs_ticks());
    }

    #[test]
    fn estimated_scroll_geometry_before_measurement() {
        let mut state = picker(sample_items(6), PickerOptions::default());
        state.set_parent_width(Some(400.0));
        let metrics = state.scroll_metrics();
        // 4 small tiles: 4 * 84 + 3 * 8.
        assert_eq!(metrics.content_width, 360.0);
        assert!(metrics.viewport_width < metrics.content_width);
        assert_eq!(state.strip_viewport_width(), metrics.viewport_width);
        assert!(state.arrows().right);
    }

    #[test]
    fn resize_refreshes_measured_viewport() {
        let options = PickerOptions {
            tiles: TileOptions {
                max_visible: None,
                ..TileOptions::default()
            },
            ..PickerOptions::default()
        };
        let mut state = picker(sample_items(12), options);
        state.toggle();
        state.scroll_changed(ScrollMetrics::new(0.0, 2000.0, 1096.0));
        assert!(!state.arrows().right);

        state.set_parent_width(Some(600.0));
        assert_eq!(state.scroll_metrics().viewport_width, state.strip_viewport_width());
        assert!(state.arrows().right);
    }

    #[test]
    fn emptied_item_list_collapses_and_notifies() {
        let options = PickerOptions {
            tiles: TileOptions {
                default_tile: false,
                ..TileOptions::default()
            },
            ..PickerOptions::default()
        };
        let mut state = picker(sample_items(3), options);
        state.toggle();

        assert!(state.set_items(sample_items(2)).is_empty());
        assert!(state.is_expanded());

        assert_eq!(state.set_items(Vec::new()), vec![Notification::Collapsed]);
        assert!(!state.is_expanded());
        assert_eq!(state.substrate().active_count(), 0);
        // Collapsed already: nothing more to report.
        assert!(state.set_items(Vec::new()).is_empty());
    }

    #[test]
    fn unmount_releases_observations_and_timers() {
        let mut state = picker(sample_items(8), PickerOptions::default());
        let t0 = Instant::now();
        state.pointer_entered();
        state.scroll_changed(ScrollMetrics::new(0.0, 200.0, 700.0));
        state.scroll_arrow(ScrollDirection::Right, t0);
        state.pointer_left(t0);
        assert_eq!(state.substrate().active_count(), 2);

        state.unmount();
        assert_eq!(state.substrate().active_count(), 0);
        assert!(!state.needs_ticks());
    }

    #[test]
    fn render_contexts_follow_expansion() {
        let items = vec![LayerItem::new("forest", "Forest")
            .with_thumbnail("forest.jpg")
            .with_thumbnail_hd("forest-hd.jpg")];
        let mut state = picker(items, PickerOptions::default());

        let tile = |state: &PickerState<RecordingSubstrate>| {
            state
                .render_contexts()
                .into_iter()
                .find(|(target, _)| *target == RenderTarget::Tile("forest".into()))
                .map(|(_, context)| context)
                .expect("tile context")
        };

        let collapsed = tile(&state);
        assert!(!collapsed.expanded);
        assert_eq!(collapsed.candidates.iter().collect::<Vec<_>>(), vec!["forest.jpg"]);

        state.toggle();
        let expanded = tile(&state);
        assert_eq!(
            expanded.candidates.iter().collect::<Vec<_>>(),
            vec!["forest-hd.jpg", "forest.jpg", DEFAULT_NO_IMAGE]
        );

        let (_, control) = &state.render_contexts()[0];
        assert!(!control.expanded);
    }

    #[test]
    fn tooltip_reflects_selected_item() {
        let items = vec![LayerItem::new("a", "Alpha").with_description("First")];
        let state = picker(items, PickerOptions::default());
        assert_eq!(state.tooltip().as_deref(), Some("Alpha\nFirst"));
    }
}
