//! Inspector state as one immutable record plus explicit transitions.
//!
//! Every change goes through [`InspectorState::apply`], which returns the next
//! state. The invariants it upholds:
//!
//! - natural size and fit geometry exist only inside [`LoadedImage`], which is
//!   only ever produced by a successful load;
//! - only the completion of the most recent load request is applied;
//! - pointer transitions are ignored until an image has been loaded;
//! - a click never touches the hover sample, and leaving the canvas only
//!   hides the hover sample without clearing it.
//!
//! The source text is shared between successive states, so pointer
//! transitions never copy it.

use std::sync::Arc;

use crate::color::Sample;
use crate::geometry::{FitGeometry, NaturalSize};

/// Identifier of a load request. Later requests have larger ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadId(pub u64);

/// Geometry of the most recent successful load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadedImage {
    pub natural: NaturalSize,
    pub fit: FitGeometry,
}

/// Everything that can happen to the inspector.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    SourceEdited(String),
    LoadRequested(LoadId),
    Loaded { id: LoadId, image: LoadedImage },
    Failed { id: LoadId, message: String },
    PointerEntered,
    PointerLeft,
    PointerMoved(Sample),
    PointerClicked(Sample),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectorState {
    source: Arc<str>,
    latest_request: Option<LoadId>,
    loading: bool,
    loaded: Option<LoadedImage>,
    error: Option<String>,
    hovering: bool,
    hover: Option<Sample>,
    click: Option<Sample>,
}

impl InspectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state after `transition`. Transitions that do not apply
    /// (stale completions, pointer input before a load) return an unchanged copy.
    #[must_use]
    pub fn apply(&self, transition: Transition) -> InspectorState {
        let mut next = self.clone();
        match transition {
            Transition::SourceEdited(source) => next.source = Arc::from(source),
            Transition::LoadRequested(id) => {
                next.latest_request = Some(id);
                next.loading = true;
            }
            Transition::Loaded { id, image } => {
                if self.is_current(id) {
                    next.loaded = Some(image);
                    next.error = None;
                    next.loading = false;
                }
            }
            Transition::Failed { id, message } => {
                if self.is_current(id) {
                    next.error = Some(message);
                    next.loading = false;
                }
            }
            Transition::PointerEntered => {
                if self.loaded.is_some() {
                    next.hovering = true;
                }
            }
            Transition::PointerLeft => next.hovering = false,
            Transition::PointerMoved(sample) => {
                if self.loaded.is_some() {
                    next.hover = Some(sample);
                }
            }
            Transition::PointerClicked(sample) => {
                if self.loaded.is_some() {
                    next.click = Some(sample);
                }
            }
        }
        next
    }

    /// Whether a completion for `id` would be applied.
    pub fn is_current(&self, id: LoadId) -> bool {
        self.latest_request == Some(id)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn latest_request(&self) -> Option<LoadId> {
        self.latest_request
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.as_ref()
    }

    /// Natural size of the loaded image, or 0x0 before any successful load.
    pub fn natural_size(&self) -> NaturalSize {
        self.loaded.map(|l| l.natural).unwrap_or_default()
    }

    pub fn fit(&self) -> Option<FitGeometry> {
        self.loaded.map(|l| l.fit)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Last hover reading, even while the pointer is outside the canvas.
    pub fn hover_sample(&self) -> Option<&Sample> {
        self.hover.as_ref()
    }

    pub fn click_sample(&self) -> Option<&Sample> {
        self.click.as_ref()
    }

    /// Whether the size panel has anything to show.
    pub fn shows_size(&self) -> bool {
        !self.natural_size().is_empty()
    }

    /// The sample panel is up while hovering or once anything was clicked.
    pub fn shows_sample_panel(&self) -> bool {
        self.hovering || self.click.is_some()
    }
}
