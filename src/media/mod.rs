// SPDX-License-Identifier: MPL-2.0
//! Thumbnail loading and resolution.
//!
//! - [`image`]: decoding fetched bytes (raster and SVG)
//! - [`loader`]: the [`ImageLoader`] seam and its file/HTTP implementation
//! - [`resolver`]: ordered, generation-checked candidate resolution

pub mod image;
pub mod loader;
pub mod resolver;

pub use image::{decode_thumbnail, is_svg_source, ImageData};
pub use loader::{ImageLoader, SourceLoader};
pub use resolver::{
    Generation, ImageResolver, LoadOutcome, LoadRequest, RenderContext, RenderTarget, Resolution,
};
