// SPDX-License-Identifier: MPL-2.0
//! Colour presets and widget styles of the picker.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Gradient, Radians, Shadow, Theme};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Configured colour preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    /// Follow the OS appearance, detected once at load time.
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced base theme matching this preset.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Resolved colours of one preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerPalette {
    pub background: (Color, Color),
    pub panel_background: (Color, Color),
    pub text: Color,
    pub subtext: Color,
    pub border: Color,
    pub hover: Color,
}

impl PickerPalette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: (palette::DARK_BG_TOP, palette::DARK_BG_BOTTOM),
            panel_background: (palette::DARK_PANEL_TOP, palette::DARK_PANEL_BOTTOM),
            text: palette::DARK_TEXT,
            subtext: palette::DARK_TEXT,
            border: palette::DARK_OUTLINE,
            hover: palette::DARK_OUTLINE,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: (palette::LIGHT_BG_TOP, palette::LIGHT_BG_BOTTOM),
            panel_background: (palette::LIGHT_PANEL_TOP, palette::LIGHT_PANEL_BOTTOM),
            text: palette::LIGHT_TEXT,
            subtext: palette::LIGHT_SUBTEXT,
            border: palette::LIGHT_OUTLINE,
            hover: palette::LIGHT_OUTLINE,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

fn vertical_gradient((top, bottom): (Color, Color)) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Radians(PI)).add_stop(0.0, top).add_stop(1.0, bottom),
    ))
}

/// Square collapsed control.
pub fn collapsed_control(colors: PickerPalette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(vertical_gradient(colors.background)),
        text_color: Some(colors.text),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::CONTROL.into(),
        },
        shadow: shadow::CONTROL,
        ..container::Style::default()
    }
}

/// Expanded tile panel.
pub fn panel(colors: PickerPalette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(vertical_gradient(colors.panel_background)),
        text_color: Some(colors.text),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::PANEL.into(),
        },
        shadow: shadow::PANEL,
        ..container::Style::default()
    }
}

/// Placeholder block for pending and unresolved thumbnails.
pub fn neutral_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_BLOCK)),
        border: Border {
            radius: radius::THUMB.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Backdrop behind a resolved thumbnail.
pub fn thumb_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::THUMB_BACKDROP)),
        border: Border {
            radius: radius::THUMB.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Clickable tile, highlighted on hover.
pub fn tile(colors: PickerPalette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(colors.hover))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color: colors.text,
            border: Border {
                radius: radius::TILE.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Transparent button wrapping the collapsed control.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Scroll arrow overlay.
pub fn arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::ARROW_HOVER,
        button::Status::Pressed => opacity::ARROW_PRESSED,
        _ => opacity::ARROW,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::TILE.into(),
            ..Border::default()
        },
        shadow: shadow::ARROW,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_keep_original_text_colours() {
        let dark = PickerPalette::dark();
        assert_eq!(dark.text, Color::from_rgb8(0x9c, 0xa3, 0xaf));
        assert_eq!(dark.subtext, dark.text);

        let light = PickerPalette::light();
        assert_eq!(light.text, Color::from_rgb8(0x0f, 0x17, 0x20));
        assert_eq!(light.subtext, Color::from_rgb8(0x55, 0x60, 0x70));
    }

    #[test]
    fn fixed_modes_resolve_without_detection() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
        assert_eq!(PickerPalette::for_mode(ThemeMode::Light), PickerPalette::light());
        // System mode depends on the host, so only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            theme: ThemeMode,
        }
        let probe: Probe = toml::from_str("theme = \"system\"").expect("should parse");
        assert_eq!(probe.theme, ThemeMode::System);
    }
}
