// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::ui::layer_picker;

/// Top-level messages consumed by `App::update`. Each picker's messages are
/// forwarded untouched to its own component.
#[derive(Debug, Clone)]
pub enum Message {
    Base(layer_picker::Message),
    Overlay(layer_picker::Message),
    /// Clears the controlled overlay picker from the host side.
    ResetOverlay,
    /// Clears the base picker's owned selection.
    ClearBase,
    /// Switches between the dark and light presets.
    ToggleTheme,
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Optional config directory override (for portable/testing setups).
    pub config_dir: Option<String>,
    /// Optional TOML file with `[[items]]` tables replacing the sample catalogue.
    pub items: Option<String>,
}
