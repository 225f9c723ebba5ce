// SPDX-License-Identifier: MPL-2.0
//! Thumbnail decoding from raster formats (PNG, JPEG, WebP, ...) and SVG.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;

/// A decoded thumbnail ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Creates a new `ImageData` from already-encoded bytes of known size.
    #[must_use]
    pub fn from_encoded(encoded_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(encoded_bytes),
            width,
            height,
        }
    }
}

/// Whether `source` names an SVG document, ignoring query and fragment.
#[must_use]
pub fn is_svg_source(source: &str) -> bool {
    let path = source.split(['?', '#']).next().unwrap_or(source);
    path.rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let trimmed = text.trim_start();
    trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && text.contains("<svg"))
}

/// Decodes fetched bytes into a displayable thumbnail.
///
/// SVG documents (by source extension or content sniffing) are rasterized to
/// PNG with resvg; everything else goes through the `image` crate.
///
/// # Errors
///
/// - [`Error::Svg`] if the SVG cannot be parsed or has empty dimensions
/// - [`Error::Image`] if the raster data is invalid or unsupported
pub fn decode_thumbnail(source: &str, bytes: &[u8]) -> Result<ImageData> {
    if is_svg_source(source) || looks_like_svg(bytes) {
        decode_svg(bytes)
    } else {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Image("image has empty dimensions".into()));
        }
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn decode_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;
    Ok(ImageData::from_encoded(png_data, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("failed to encode png");
        bytes.into_inner()
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode_thumbnail("thumb.png", &png_bytes(4, 2)).expect("png should decode");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn decode_svg_rasterizes_successfully() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>"#;
        let data = decode_thumbnail("./firstplace.svg", svg.as_bytes()).expect("svg should load");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn svg_is_sniffed_without_extension() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"></svg>"#;
        let data = decode_thumbnail("https://cdn.test/icon", svg.as_bytes())
            .expect("sniffed svg should load");
        assert_eq!(data.width, 2);
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let result = decode_thumbnail("broken.jpg", b"definitely not a jpeg");
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn svg_source_detection_ignores_query() {
        assert!(is_svg_source("icons/first.svg?v=2"));
        assert!(is_svg_source("ICON.SVG"));
        assert!(!is_svg_source("photo.jpg?fmt=svg"));
    }
}
