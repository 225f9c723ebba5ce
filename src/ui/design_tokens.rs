// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the picker, grouped the way the W3C Design Tokens draft
groups them.

## Organization

- **Palette**: Base colors of the two presets
- **Opacity**: Overlay levels of the scroll arrows
- **Spacing**: Gaps inside the panel and tiles
- **Typography**: Title and description sizes
- **Radius**: Corner radii
- **Shadow**: Control, panel and arrow shadows

## Examples

```
use layer_picker::ui::design_tokens::{palette, radius};

let neutral = palette::NEUTRAL_BLOCK;
assert!(radius::CONTROL > radius::THUMB);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    // Dark preset
    pub const DARK_BG_TOP: Color = Color::from_rgb8(0x1b, 0x1f, 0x23);
    pub const DARK_BG_BOTTOM: Color = Color::from_rgb8(0x11, 0x14, 0x18);
    pub const DARK_PANEL_TOP: Color = Color::from_rgb8(0x1e, 0x24, 0x2a);
    pub const DARK_PANEL_BOTTOM: Color = Color::from_rgb8(0x16, 0x1b, 0x20);
    pub const DARK_TEXT: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
    pub const DARK_OUTLINE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.08);

    // Light preset
    pub const LIGHT_BG_TOP: Color = Color::from_rgb8(0xff, 0xff, 0xff);
    pub const LIGHT_BG_BOTTOM: Color = Color::from_rgb8(0xf7, 0xf9, 0xfb);
    pub const LIGHT_PANEL_TOP: Color = Color::from_rgb8(0xff, 0xff, 0xff);
    pub const LIGHT_PANEL_BOTTOM: Color = Color::from_rgb8(0xfb, 0xfd, 0xff);
    pub const LIGHT_TEXT: Color = Color::from_rgb8(0x0f, 0x17, 0x20);
    pub const LIGHT_SUBTEXT: Color = Color::from_rgb8(0x55, 0x60, 0x70);
    pub const LIGHT_OUTLINE: Color = Color::from_rgba(9.0 / 255.0, 30.0 / 255.0, 66.0 / 255.0, 0.06);

    /// Pending or unresolved thumbnail.
    pub const NEUTRAL_BLOCK: Color = Color::from_rgb8(0x44, 0x44, 0x44);

    /// Letterbox behind a resolved thumbnail.
    pub const THUMB_BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.33);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const ARROW: f32 = 0.12;
    pub const ARROW_HOVER: f32 = 0.25;
    pub const ARROW_PRESSED: f32 = 0.35;
    pub const SHADOW: f32 = 0.4;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Gap between the scroll arrows and the strip.
    pub const ARROW_GAP: f32 = 4.0;
    /// Gap between a tile's thumbnail and its labels.
    pub const TILE_LABEL_GAP: f32 = 6.0;
    /// Space between the two demo pickers.
    pub const DEMO: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 13.0;
    pub const DESCRIPTION: f32 = 11.0;
    pub const ARROW: f32 = 20.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const THUMB: f32 = 8.0;
    pub const TILE: f32 = 8.0;
    pub const CONTROL: f32 = 12.0;
    pub const PANEL: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const SHADE: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const CONTROL: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 22.0,
    };

    pub const PANEL: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 34.0,
    };

    pub const ARROW: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::ARROW_HOVER > opacity::ARROW);
    assert!(opacity::ARROW_PRESSED > opacity::ARROW_HOVER);
    assert!(typography::TITLE > typography::DESCRIPTION);
    assert!(radius::CONTROL >= radius::TILE);
};
