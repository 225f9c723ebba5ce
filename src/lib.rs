// SPDX-License-Identifier: MPL-2.0
//! `layer_picker` is a hover-to-expand layer picker widget for Iced.
//!
//! A collapsed control shows the selected layer; hovering (or tapping, on
//! touch devices) opens a panel with a pinned "default" tile, a horizontally
//! scrolling strip of item tiles and an optional "more" tile.
//!
//! The crate is split into a toolkit-free core and an Iced binding:
//!
//! - [`picker`] - expansion and selection state machine, geometry, tiles
//! - [`media`] - thumbnail loading and the candidate fallback resolver
//! - [`ui`] - the [`ui::layer_picker::LayerPicker`] component and its styles
//! - [`config`], [`i18n`], [`diagnostics`] - settings, labels, event log
//! - [`app`] - a small demo hosting two pickers

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod picker;
pub mod ui;
