// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through the headless picker core.
//!
//! A picker state and a resolver are driven together the way the Iced
//! component drives them, with loads completed by hand so ordering and
//! staleness are deterministic.

use layer_picker::config::{self, Config, DEFAULT_NO_IMAGE};
use layer_picker::diagnostics::{DiagnosticsLog, PickerEventKind};
use layer_picker::error::Error;
use layer_picker::i18n::I18n;
use layer_picker::media::{ImageResolver, LoadOutcome, LoadRequest, RenderTarget, Resolution};
use layer_picker::picker::{
    InputMode, LayerItem, Notification, Observation, PickerOptions, PickerState,
    RecordingSubstrate, ScrollDirection, ScrollMetrics, SelectionMode, TileOptions,
};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn catalogue(count: usize) -> Vec<LayerItem> {
    (0..count)
        .map(|i| {
            LayerItem::new(format!("layer-{i}"), format!("Layer {i}"))
                .with_thumbnail(format!("sd-{i}.png"))
                .with_thumbnail_hd(format!("hd-{i}.png"))
        })
        .collect()
}

/// Resolver driven by a picker, with a fake source table standing in for
/// the network.
struct Harness {
    state: PickerState<RecordingSubstrate>,
    resolver: ImageResolver<&'static str>,
    log: DiagnosticsLog,
    pending: Vec<LoadRequest>,
    available: HashMap<String, &'static str>,
}

impl Harness {
    fn new(state: PickerState<RecordingSubstrate>) -> Self {
        let mut harness = Self {
            state,
            resolver: ImageResolver::new(),
            log: DiagnosticsLog::default(),
            pending: Vec::new(),
            available: HashMap::new(),
        };
        harness.sync();
        harness
    }

    fn sync(&mut self) {
        let contexts = self.state.render_contexts();
        let live: HashSet<RenderTarget> = contexts.iter().map(|(t, _)| t.clone()).collect();
        self.resolver.retain(|target| live.contains(target));
        for (target, context) in contexts {
            if let Some(request) = self.resolver.resolve(target, context, &mut self.log) {
                self.pending.push(request);
            }
        }
    }

    /// Completes every queued load, including fallbacks they trigger.
    fn drain(&mut self) {
        while let Some(request) = self.pending.pop() {
            let outcome = match self.available.get(&request.source) {
                Some(image) => LoadOutcome::success(&request, *image),
                None => LoadOutcome::failure(&request, Error::Network("404".into())),
            };
            if let Some(next) = self.resolver.complete(outcome, &mut self.log) {
                self.pending.push(next);
            }
        }
    }

    fn shown(&self, target: &RenderTarget) -> Option<&'static str> {
        self.resolver.resolution(target).image().copied()
    }
}

#[test]
fn six_items_with_limit_four_show_more_and_truncate() {
    let options = PickerOptions {
        tiles: TileOptions {
            max_visible: NonZeroUsize::new(4),
            more_handler: true,
            ..TileOptions::default()
        },
        ..PickerOptions::default()
    };
    let mut state = PickerState::new(catalogue(6), options, RecordingSubstrate::new());
    state.toggle();

    let ids: Vec<_> = state.visible_items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["layer-0", "layer-1", "layer-2", "layer-3"]);
    assert!(state.plan().show_more);
    assert!(state.plan().show_default);

    // Truncated items cannot be selected through the panel.
    assert!(state.select_item("layer-5").is_empty());
    assert_eq!(state.invoke_more(), vec![Notification::More, Notification::Collapsed]);
}

#[test]
fn hover_flow_expands_and_collapses_after_delay() {
    let mut state = PickerState::new(catalogue(3), PickerOptions::default(), RecordingSubstrate::new());
    let start = Instant::now();

    assert_eq!(state.pointer_entered(), vec![Notification::Expanded]);
    assert!(state.substrate().is_observing(Observation::OutsidePointerDown));

    state.pointer_left(start);
    assert!(state.needs_ticks());
    assert!(state.tick(start + Duration::from_millis(100)).0.is_empty());

    // Coming back cancels the pending close.
    state.pointer_entered();
    assert!(state.close_deadline().is_none());
    state.pointer_left(start + Duration::from_millis(200));

    let (notifications, _) = state.tick(start + Duration::from_millis(360));
    assert_eq!(notifications, vec![Notification::Collapsed]);
    assert_eq!(state.substrate().active_count(), 0);
    assert!(!state.needs_ticks());
}

#[test]
fn touch_devices_ignore_hover_and_use_taps() {
    let options = PickerOptions {
        input_mode: InputMode::Auto,
        ..PickerOptions::default()
    };
    let mut state = PickerState::new(catalogue(2), options, RecordingSubstrate::touch());

    assert!(state.is_touch());
    assert!(state.pointer_entered().is_empty());
    assert!(!state.is_expanded());

    assert_eq!(state.toggle(), vec![Notification::Expanded]);
    state.pointer_left(Instant::now());
    assert!(state.close_deadline().is_none());
    assert_eq!(state.outside_pointer_down(), vec![Notification::Collapsed]);
}

#[test]
fn controlled_picker_waits_for_host_value() {
    let options = PickerOptions {
        selection: SelectionMode::Controlled(Some("layer-0".into())),
        ..PickerOptions::default()
    };
    let mut state = PickerState::new(catalogue(3), options, RecordingSubstrate::new());
    state.toggle();

    let notifications = state.select_item("layer-2");
    assert!(matches!(&notifications[0], Notification::Selected(item) if item.id == "layer-2"));
    assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("layer-0"));

    assert!(state.set_controlled_value(Some("layer-2".into())));
    assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("layer-2"));
}

#[test]
fn uncontrolled_picker_ignores_host_value() {
    let mut state = PickerState::new(catalogue(3), PickerOptions::default(), RecordingSubstrate::new());
    assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("layer-0"));

    assert!(!state.set_controlled_value(Some("layer-1".into())));
    assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("layer-0"));
    assert!(state
        .diagnostics()
        .kinds()
        .any(|k| *k == PickerEventKind::ControlledValueIgnored));

    state.toggle();
    state.select_item("layer-1");
    assert_eq!(state.selected_item().map(|i| i.id.as_str()), Some("layer-1"));
}

#[test]
fn expanded_tiles_prefer_hd_then_fall_back() {
    let state = PickerState::new(catalogue(2), PickerOptions::default(), RecordingSubstrate::new());
    let mut harness = Harness::new(state);
    harness.available.insert("sd-0.png".into(), "sd-0");
    harness.available.insert("sd-1.png".into(), "sd-1");
    harness.available.insert("hd-1.png".into(), "hd-1");
    harness.drain();

    let tile0 = RenderTarget::Tile("layer-0".into());
    assert_eq!(harness.shown(&RenderTarget::Collapsed), Some("sd-0"));
    assert_eq!(harness.shown(&tile0), Some("sd-0"));

    harness.state.toggle();
    harness.sync();
    // Expanding restarts resolution of the tiles.
    assert!(harness.resolver.resolution(&tile0).is_pending());
    harness.drain();

    assert_eq!(harness.shown(&tile0), Some("sd-0"));
    assert_eq!(harness.shown(&RenderTarget::Tile("layer-1".into())), Some("hd-1"));
    // The collapsed control keeps its low-resolution source.
    assert_eq!(
        harness.resolver.resolution(&RenderTarget::Collapsed).source(),
        Some("sd-0.png")
    );
}

#[test]
fn missing_everything_ends_unresolved() {
    let items = vec![LayerItem::new("bare", "Bare")];
    let state = PickerState::new(items, PickerOptions::default(), RecordingSubstrate::new());
    let mut harness = Harness::new(state);
    harness.drain();

    assert_eq!(
        harness.resolver.resolution(&RenderTarget::Collapsed),
        &Resolution::Unresolved
    );
    assert!(harness.log.kinds().any(|k| matches!(
        k,
        PickerEventKind::CandidateFailed { source, .. } if source == DEFAULT_NO_IMAGE
    )));
}

#[test]
fn completion_after_selection_change_is_dropped() {
    let state = PickerState::new(catalogue(3), PickerOptions::default(), RecordingSubstrate::new());
    let mut harness = Harness::new(state);
    let stale: Vec<LoadRequest> = harness.pending.drain(..).collect();

    harness.state.force_select("layer-2");
    harness.sync();

    let control = stale
        .iter()
        .find(|r| r.target == RenderTarget::Collapsed)
        .expect("control was requested");
    assert!(harness
        .resolver
        .complete(LoadOutcome::success(control, "old"), &mut harness.log)
        .is_none());
    assert!(harness.resolver.resolution(&RenderTarget::Collapsed).is_pending());

    harness.available.insert("sd-2.png".into(), "sd-2");
    harness.drain();
    assert_eq!(harness.shown(&RenderTarget::Collapsed), Some("sd-2"));
    assert!(harness
        .log
        .kinds()
        .any(|k| matches!(k, PickerEventKind::StaleCompletionDropped { .. })));
}

#[test]
fn arrow_scroll_moves_one_step_without_collapsing() {
    let mut state = PickerState::new(catalogue(8), PickerOptions {
        tiles: TileOptions {
            max_visible: None,
            ..TileOptions::default()
        },
        ..PickerOptions::default()
    }, RecordingSubstrate::new());
    state.toggle();
    state.scroll_changed(ScrollMetrics::new(0.0, 200.0, 700.0));
    assert!(state.arrows().right);
    assert!(!state.arrows().left);

    let start = Instant::now();
    state.scroll_arrow(ScrollDirection::Right, start);
    let (notifications, offset) = state.tick(start + Duration::from_secs(1));
    assert!(notifications.is_empty());
    assert_eq!(offset, Some(120.0));
    assert!(state.is_expanded());
}

#[test]
fn config_round_trip_drives_picker_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.picker.max_visible = 0;
    config.picker.hover_close_delay_ms = 5_000;
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let options = loaded.picker_options(SelectionMode::default(), None, true);
    assert_eq!(options.tiles.max_visible, None);
    assert_eq!(options.hover_close_delay.value(), 2000);

    let i18n = I18n::new(None, loaded.general.language.as_deref());
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("picker-default-title"), "Par défaut");
}

#[test]
fn items_file_feeds_picker() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("items.toml");
    std::fs::write(
        &path,
        r#"
[[items]]
id = "forest"
title = "Forest"
thumbnail = "forest.jpg"

[[items]]
id = "desert"
title = "Desert"
description = "Dunes"
"#,
    )
    .expect("Failed to write items");

    let items = config::load_items_from_path(&path).expect("items should parse");
    let state = PickerState::new(items, PickerOptions::default(), RecordingSubstrate::new());
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.tooltip().as_deref(), Some("Forest\n"));
}

#[test]
fn diagnostics_export_lists_flow() {
    let mut state = PickerState::new(catalogue(2), PickerOptions::default(), RecordingSubstrate::new());
    state.toggle();
    state.select_item("layer-1");

    let exported = state.diagnostics().export_toml().expect("export");
    assert!(exported.contains("type = \"mounted\""));
    assert!(exported.contains("type = \"item_selected\""));
    assert!(exported.contains("reason = \"action\""));
}
