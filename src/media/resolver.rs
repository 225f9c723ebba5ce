// SPDX-License-Identifier: MPL-2.0
//! Cascading thumbnail resolution without flicker.
//!
//! For every render target the resolver walks an ordered candidate list one
//! source at a time: a later candidate is only requested once the earlier one
//! has failed, so the first source that loads (in list order) always wins.
//!
//! Every call to [`ImageResolver::resolve`] with new inputs starts a fresh
//! generation for that target. Completions carry the generation they were
//! issued under; anything that does not match the slot's current generation
//! and cursor is dropped, so a slow load from a superseded context can never
//! overwrite what is on screen.
//!
//! # Usage
//!
//! ```
//! use layer_picker::diagnostics::DiagnosticsLog;
//! use layer_picker::media::{ImageResolver, LoadOutcome, RenderContext, RenderTarget, Resolution};
//! use layer_picker::picker::CandidateList;
//!
//! let mut log = DiagnosticsLog::default();
//! let mut resolver: ImageResolver<&str> = ImageResolver::new();
//! let context = RenderContext::new(CandidateList::single("a.png"), false);
//!
//! let request = resolver
//!     .resolve(RenderTarget::Collapsed, context, &mut log)
//!     .expect("first resolve issues a load");
//! resolver.complete(LoadOutcome::success(&request, "pixels"), &mut log);
//!
//! assert!(matches!(
//!     resolver.resolution(&RenderTarget::Collapsed),
//!     Resolution::Resolved { .. }
//! ));
//! ```

use super::ImageData;
use crate::diagnostics::{DiagnosticsLog, PickerEventKind};
use crate::error::Error;
use crate::picker::CandidateList;
use std::collections::HashMap;
use std::fmt;

/// Where a resolved image is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// Thumbnail inside the collapsed control.
    Collapsed,
    /// The pinned "default" tile.
    DefaultTile,
    /// The pinned "more" tile.
    MoreTile,
    /// An item tile, keyed by item id.
    Tile(String),
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTarget::Collapsed => write!(f, "collapsed"),
            RenderTarget::DefaultTile => write!(f, "default"),
            RenderTarget::MoreTile => write!(f, "more"),
            RenderTarget::Tile(id) => write!(f, "tile:{}", id),
        }
    }
}

/// Inputs that define one resolution; a change in either field restarts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderContext {
    pub candidates: CandidateList,
    pub expanded: bool,
}

impl RenderContext {
    #[must_use]
    pub fn new(candidates: CandidateList, expanded: bool) -> Self {
        Self {
            candidates,
            expanded,
        }
    }
}

/// Monotonic token identifying one resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a target currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T = ImageData> {
    /// Loading; shown as a neutral block.
    Pending,
    /// A candidate loaded.
    Resolved { source: String, image: T },
    /// Every candidate failed; shown as a neutral block, never a broken image.
    Unresolved,
}

impl<T> Resolution<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending)
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { source, .. } => Some(source),
            _ => None,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&T> {
        match self {
            Resolution::Resolved { image, .. } => Some(image),
            _ => None,
        }
    }
}

/// A single load the host must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub target: RenderTarget,
    pub generation: Generation,
    pub index: usize,
    pub source: String,
}

/// The host's report of one finished load.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T = ImageData> {
    pub target: RenderTarget,
    pub generation: Generation,
    pub index: usize,
    pub result: Result<T, Error>,
}

impl<T> LoadOutcome<T> {
    #[must_use]
    pub fn success(request: &LoadRequest, image: T) -> Self {
        Self::from_result(request, Ok(image))
    }

    #[must_use]
    pub fn failure(request: &LoadRequest, error: Error) -> Self {
        Self::from_result(request, Err(error))
    }

    #[must_use]
    pub fn from_result(request: &LoadRequest, result: Result<T, Error>) -> Self {
        Self {
            target: request.target.clone(),
            generation: request.generation,
            index: request.index,
            result,
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    context: RenderContext,
    generation: Generation,
    cursor: usize,
    state: Resolution<T>,
}

/// Per-target cascading loader state.
#[derive(Debug)]
pub struct ImageResolver<T = ImageData> {
    slots: HashMap<RenderTarget, Slot<T>>,
    last_generation: u64,
    pending: Resolution<T>,
}

impl<T> Default for ImageResolver<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            last_generation: 0,
            pending: Resolution::Pending,
        }
    }
}

impl<T> ImageResolver<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_generation(&mut self) -> Generation {
        self.last_generation += 1;
        Generation(self.last_generation)
    }

    /// Starts (or keeps) resolution of `target` for `context`.
    ///
    /// Identical inputs are a no-op: the current state, resolved or pending,
    /// is kept and nothing new is requested. New inputs invalidate any load
    /// in flight for this target, reset it to [`Resolution::Pending`] and
    /// return the request for the first candidate.
    pub fn resolve(
        &mut self,
        target: RenderTarget,
        context: RenderContext,
        log: &mut DiagnosticsLog,
    ) -> Option<LoadRequest> {
        if self
            .slots
            .get(&target)
            .is_some_and(|slot| slot.context == context)
        {
            return None;
        }

        let generation = self.next_generation();
        let first = context.candidates.get(0).map(str::to_string);
        let state = if first.is_some() {
            Resolution::Pending
        } else {
            log.record(PickerEventKind::Exhausted {
                target: target.to_string(),
            });
            Resolution::Unresolved
        };

        self.slots.insert(
            target.clone(),
            Slot {
                context,
                generation,
                cursor: 0,
                state,
            },
        );

        first.map(|source| LoadRequest {
            target,
            generation,
            index: 0,
            source,
        })
    }

    /// Applies a finished load.
    ///
    /// Success commits the source and stops. Failure advances to the next
    /// candidate and returns its request, or marks the target unresolved when
    /// the list is exhausted. Stale outcomes change nothing.
    pub fn complete(&mut self, outcome: LoadOutcome<T>, log: &mut DiagnosticsLog) -> Option<LoadRequest> {
        let LoadOutcome {
            target,
            generation,
            index,
            result,
        } = outcome;

        let Some(slot) = self.slots.get_mut(&target) else {
            log.record(PickerEventKind::StaleCompletionDropped {
                target: target.to_string(),
                generation: generation.value(),
            });
            return None;
        };

        if slot.generation != generation || slot.cursor != index || !slot.state.is_pending() {
            log.record(PickerEventKind::StaleCompletionDropped {
                target: target.to_string(),
                generation: generation.value(),
            });
            return None;
        }

        let source = slot
            .context
            .candidates
            .get(index)
            .map(str::to_string)
            .unwrap_or_default();

        match result {
            Ok(image) => {
                log.record(PickerEventKind::Resolved {
                    target: target.to_string(),
                    source: source.clone(),
                });
                slot.state = Resolution::Resolved { source, image };
                None
            }
            Err(error) => {
                log.record(PickerEventKind::CandidateFailed {
                    target: target.to_string(),
                    source,
                    reason: error.kind().to_string(),
                });
                slot.cursor += 1;
                match slot.context.candidates.get(slot.cursor) {
                    Some(next) => Some(LoadRequest {
                        target,
                        generation,
                        index: slot.cursor,
                        source: next.to_string(),
                    }),
                    None => {
                        log.record(PickerEventKind::Exhausted {
                            target: target.to_string(),
                        });
                        slot.state = Resolution::Unresolved;
                        None
                    }
                }
            }
        }
    }

    /// What `target` currently shows. Unknown targets are pending.
    #[must_use]
    pub fn resolution(&self, target: &RenderTarget) -> &Resolution<T> {
        self.slots
            .get(target)
            .map_or(&self.pending, |slot| &slot.state)
    }

    /// Current generation of `target`, if it has ever been resolved.
    #[must_use]
    pub fn generation(&self, target: &RenderTarget) -> Option<Generation> {
        self.slots.get(target).map(|slot| slot.generation)
    }

    /// Drops targets that are no longer rendered. Their in-flight loads
    /// become stale.
    pub fn retain(&mut self, mut keep: impl FnMut(&RenderTarget) -> bool) {
        self.slots.retain(|target, _| keep(target));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
