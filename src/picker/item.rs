// SPDX-License-Identifier: MPL-2.0
//! Layer items and the ordered thumbnail candidate lists built from them.

use serde::{Deserialize, Serialize};

/// One selectable layer option.
///
/// Ids must be unique within one item list; this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_hd: Option<String>,
}

impl LayerItem {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            thumbnail: None,
            thumbnail_hd: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, source: impl Into<String>) -> Self {
        self.thumbnail = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_thumbnail_hd(mut self, source: impl Into<String>) -> Self {
        self.thumbnail_hd = Some(source.into());
        self
    }

    /// Tooltip shown on the collapsed control: title and description on two lines.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!(
            "{}\n{}",
            self.title,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

/// Ordered image sources, highest fidelity first.
///
/// Built by [`CandidateList::collapsed`] and [`CandidateList::expanded`], both
/// of which end with the no-image placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CandidateList(Vec<String>);

impl CandidateList {
    /// `[thumbnail ?? fallback]`, used while the panel is collapsed.
    #[must_use]
    pub fn collapsed(item: Option<&LayerItem>, fallback: &str) -> Self {
        let source = item
            .and_then(|it| it.thumbnail.clone())
            .unwrap_or_else(|| fallback.to_string());
        Self(vec![source])
    }

    /// `[thumbnail_hd?, thumbnail?, fallback]`, used while expanded.
    #[must_use]
    pub fn expanded(item: Option<&LayerItem>, fallback: &str) -> Self {
        let mut sources = Vec::with_capacity(3);
        if let Some(item) = item {
            sources.extend(item.thumbnail_hd.iter().cloned());
            sources.extend(item.thumbnail.iter().cloned());
        }
        sources.push(fallback.to_string());
        Self(sources)
    }

    /// A single fixed source (default and more tiles).
    #[must_use]
    pub fn single(source: impl Into<String>) -> Self {
        Self(vec![source.into()])
    }

    /// Arbitrary ordered sources; may be empty.
    #[must_use]
    pub fn from_sources(sources: Vec<String>) -> Self {
        Self(sources)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
