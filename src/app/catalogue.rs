// SPDX-License-Identifier: MPL-2.0
//! Built-in layer list used when no `--items` file is given.

use crate::picker::LayerItem;

fn remote(seed: &str, width: u32) -> String {
    format!("https://picsum.photos/seed/{seed}/{width}/{}", width * 2 / 3)
}

/// Six base layers; with the default `max_visible` of four the last two sit
/// behind the "more" tile.
#[must_use]
pub fn sample_items() -> Vec<LayerItem> {
    [
        ("forest", "Forest", "Dense canopy"),
        ("desert", "Desert", "Dunes at noon"),
        ("urban", "Urban", "Street grid"),
        ("winter", "Winter", "Fresh snow"),
        ("satellite-night", "Night", "City lights from orbit"),
        ("coastal", "Coastal", "Shoreline and shelf"),
    ]
    .into_iter()
    .map(|(id, title, description)| {
        LayerItem::new(id, title)
            .with_description(description)
            .with_thumbnail(remote(id, 240))
            .with_thumbnail_hd(remote(id, 480))
    })
    .collect()
}

/// Overlay layers for the second, host-controlled picker.
#[must_use]
pub fn overlay_items() -> Vec<LayerItem> {
    vec![
        LayerItem::new("labels", "Labels")
            .with_description("Place names")
            .with_thumbnail(remote("labels", 240)),
        LayerItem::new("roads", "Roads").with_thumbnail(remote("roads", 240)),
        // No thumbnail: renders the "no image" placeholder.
        LayerItem::new("borders", "Borders").with_description("Administrative lines"),
    ]
}
