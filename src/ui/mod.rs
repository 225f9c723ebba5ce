// SPDX-License-Identifier: MPL-2.0
//! Iced presentation of the picker.
//!
//! - [`layer_picker`] - the component: messages, update, view, subscriptions
//! - [`theme`] - colour presets and widget style functions
//! - [`design_tokens`] - visual constants
//! - [`widgets`] - custom wrapper widgets

pub mod design_tokens;
pub mod layer_picker;
pub mod theme;
pub mod widgets;
