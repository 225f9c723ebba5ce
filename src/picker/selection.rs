// SPDX-License-Identifier: MPL-2.0
//! Selection ownership: host-controlled or picker-owned.
//!
//! The mode is fixed when the picker is built. Switching modes on a live
//! picker is not supported.

use super::item::LayerItem;

/// How the picker is told about its selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// The host owns the value and pushes every change back in.
    Controlled(Option<String>),
    /// The picker owns the value, starting from `default` (or the first item).
    Uncontrolled { default: Option<String> },
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::Uncontrolled { default: None }
    }
}

/// The current selection value, tagged by owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    External(Option<String>),
    Owned(Option<String>),
}

impl Selection {
    /// Resolves the construction-time mode into a value slot.
    #[must_use]
    pub fn from_mode(mode: SelectionMode, items: &[LayerItem]) -> Self {
        match mode {
            SelectionMode::Controlled(value) => Selection::External(value),
            SelectionMode::Uncontrolled { default } => {
                Selection::Owned(default.or_else(|| items.first().map(|it| it.id.clone())))
            }
        }
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        matches!(self, Selection::External(_))
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        match self {
            Selection::External(value) | Selection::Owned(value) => value.as_deref(),
        }
    }

    /// Applies a user selection. Only an owned value changes; a controlled
    /// value waits for the host. Returns `true` if the visible value changed.
    pub fn select(&mut self, id: &str) -> bool {
        match self {
            Selection::Owned(value) => {
                let changed = value.as_deref() != Some(id);
                *value = Some(id.to_string());
                changed
            }
            Selection::External(_) => false,
        }
    }

    /// Clears an owned value. Controlled values are left to the host.
    pub fn clear(&mut self) -> bool {
        match self {
            Selection::Owned(value) => value.take().is_some(),
            Selection::External(_) => false,
        }
    }

    /// Host pushes a new controlled value. Returns `false` (and changes
    /// nothing) when the picker owns its value.
    pub fn sync_external(&mut self, next: Option<String>) -> bool {
        match self {
            Selection::External(value) => {
                *value = next;
                true
            }
            Selection::Owned(_) => false,
        }
    }

    /// Imperative override from outside the interaction flow; writes the slot
    /// whichever mode is active.
    pub fn force(&mut self, id: Option<String>) {
        match self {
            Selection::External(value) | Selection::Owned(value) => *value = id,
        }
    }

    /// Looks the selected item up in `items`.
    #[must_use]
    pub fn resolve<'a>(&self, items: &'a [LayerItem]) -> Option<&'a LayerItem> {
        let id = self.current()?;
        items.iter().find(|it| it.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<LayerItem> {
        vec![LayerItem::new("a", "Alpha"), LayerItem::new("b", "Beta")]
    }

    #[test]
    fn uncontrolled_defaults_to_first_item() {
        let selection = Selection::from_mode(SelectionMode::default(), &items());
        assert_eq!(selection.current(), Some("a"));
        assert!(!selection.is_controlled());
    }

    #[test]
    fn uncontrolled_honours_default_value() {
        let mode = SelectionMode::Uncontrolled {
            default: Some("b".into()),
        };
        let selection = Selection::from_mode(mode, &items());
        assert_eq!(selection.current(), Some("b"));
    }

    #[test]
    fn owned_selection_updates_immediately() {
        let mut selection = Selection::from_mode(SelectionMode::default(), &items());
        assert!(selection.select("b"));
        assert_eq!(selection.current(), Some("b"));
        assert!(!selection.select("b"));
    }

    #[test]
    fn controlled_selection_waits_for_host() {
        let mut selection =
            Selection::from_mode(SelectionMode::Controlled(Some("a".into())), &items());
        assert!(!selection.select("b"));
        assert_eq!(selection.current(), Some("a"));

        assert!(selection.sync_external(Some("b".into())));
        assert_eq!(selection.current(), Some("b"));
    }

    #[test]
    fn sync_external_is_ignored_when_owned() {
        let mut selection = Selection::from_mode(SelectionMode::default(), &items());
        assert!(!selection.sync_external(Some("b".into())));
        assert_eq!(selection.current(), Some("a"));
    }

    #[test]
    fn clear_only_affects_owned_value() {
        let mut owned = Selection::from_mode(SelectionMode::default(), &items());
        assert!(owned.clear());
        assert_eq!(owned.current(), None);

        let mut external = Selection::External(Some("a".into()));
        assert!(!external.clear());
        assert_eq!(external.current(), Some("a"));
    }

    #[test]
    fn force_writes_either_mode() {
        let mut external = Selection::External(None);
        external.force(Some("b".into()));
        assert_eq!(external.current(), Some("b"));

        let mut owned = Selection::Owned(Some("a".into()));
        owned.force(Some("b".into()));
        assert_eq!(owned.current(), Some("b"));
    }

    #[test]
    fn resolve_finds_item_or_none() {
        let items = items();
        assert_eq!(
            Selection::Owned(Some("b".into()))
                .resolve(&items)
                .map(|it| it.title.as_str()),
            Some("Beta")
        );
        assert!(Selection::Owned(Some("zzz".into())).resolve(&items).is_none());
    }
}
