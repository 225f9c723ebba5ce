// SPDX-License-Identifier: MPL-2.0
//! Out-of-band thumbnail loading.
//!
//! [`ImageLoader`] is the seam between the resolver and the outside world: it
//! turns one source string into a decoded image or an error. The resolver
//! never awaits anything itself; the host runs the returned futures and feeds
//! completions back.

use super::image::{decode_thumbnail, ImageData};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::path::{Path, PathBuf};

/// Loads one image source.
pub trait ImageLoader: Send + Sync {
    fn load(&self, source: &str) -> BoxFuture<'static, Result<ImageData>>;
}

/// Fetches `http(s)` sources with reqwest and reads everything else from the
/// file system, relative to an optional asset root. Decoding runs on the
/// blocking pool.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    client: reqwest::Client,
    asset_root: Option<PathBuf>,
}

impl SourceLoader {
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be initialised.
    pub fn new(asset_root: Option<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("LayerPicker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, asset_root })
    }

    /// Maps a non-URL source onto the file system.
    #[must_use]
    pub fn resolve_path(&self, source: &str) -> PathBuf {
        let source = source.strip_prefix("file://").unwrap_or(source);
        let path = Path::new(source);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let relative = source.strip_prefix("./").unwrap_or(source);
        match &self.asset_root {
            Some(root) => root.join(relative),
            None => PathBuf::from(relative),
        }
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_remote(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }
    Ok(response.bytes().await?.to_vec())
}

async fn decode_blocking(source: String, bytes: Vec<u8>) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || decode_thumbnail(&source, &bytes))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

impl ImageLoader for SourceLoader {
    fn load(&self, source: &str) -> BoxFuture<'static, Result<ImageData>> {
        let source = source.to_string();
        if is_remote(&source) {
            let client = self.client.clone();
            async move {
                let bytes = fetch_remote(client, source.clone()).await?;
                decode_blocking(source, bytes).await
            }
            .boxed()
        } else {
            let path = self.resolve_path(&source);
            async move {
                let bytes = tokio::task::spawn_blocking(move || std::fs::read(path))
                    .await
                    .map_err(|e| Error::Io(e.to_string()))??;
                decode_blocking(source, bytes).await
            }
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn relative_sources_resolve_against_asset_root() {
        let loader = SourceLoader::new(Some(PathBuf::from("/srv/assets"))).expect("client");
        assert_eq!(
            loader.resolve_path("./noimage.png"),
            PathBuf::from("/srv/assets/noimage.png")
        );
        assert_eq!(
            loader.resolve_path("thumbs/a.jpg"),
            PathBuf::from("/srv/assets/thumbs/a.jpg")
        );
        assert_eq!(
            loader.resolve_path("/abs/b.png"),
            PathBuf::from("/abs/b.png")
        );
        assert_eq!(
            loader.resolve_path("file:///abs/c.png"),
            PathBuf::from("/abs/c.png")
        );
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://images.example/a.jpg"));
        assert!(is_remote("http://images.example/a.jpg"));
        assert!(!is_remote("./a.jpg"));
    }

    #[tokio::test]
    async fn loads_png_from_asset_root() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        RgbaImage::from_pixel(3, 2, Rgba([0, 255, 0, 255]))
            .save(temp_dir.path().join("thumb.png"))
            .expect("failed to write png");

        let loader = SourceLoader::new(Some(temp_dir.path().to_path_buf())).expect("client");
        let data = loader.load("./thumb.png").await.expect("thumb should load");
        assert_eq!((data.width, data.height), (3, 2));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loader = SourceLoader::new(Some(temp_dir.path().to_path_buf())).expect("client");
        let result = loader.load("missing.png").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
