use std::path::Path;

use image::imageops::FilterType;

use crate::canvas::Canvas;
use crate::color::Sample;
use crate::config::InspectorConfig;
use crate::consts::LOAD_FAILED_MESSAGE;
use crate::error::{InspectorError, ReadbackError, Result};
use crate::geometry::FitGeometry;
use crate::load::{LoadOutcome, LoadRequest, LoadTicketer, Loader};
use crate::source::DataUrl;
use crate::state::{InspectorState, LoadedImage, Transition};

/// One inspector session: the state record, the canvas it describes, and the
/// load bookkeeping that keeps the two in step.
pub struct Inspector {
    state: InspectorState,
    canvas: Canvas,
    ticketer: LoadTicketer,
    filter: FilterType,
    max_source_bytes: u64,
}

impl Inspector {
    pub fn new(config: &InspectorConfig) -> Self {
        Self {
            state: InspectorState::new(),
            canvas: Canvas::default(),
            ticketer: LoadTicketer::new(),
            filter: config.render.filter.filter_type(),
            max_source_bytes: config.fetch.max_bytes,
        }
    }

    /// Take up render and size settings from a new config. Affects the next draw.
    pub fn apply_config(&mut self, config: &InspectorConfig) {
        self.filter = config.render.filter.filter_type();
        self.max_source_bytes = config.fetch.max_bytes;
    }

    pub fn state(&self) -> &InspectorState {
        &self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn transition(&mut self, transition: Transition) {
        self.state = self.state.apply(transition);
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.transition(Transition::SourceEdited(source.into()));
    }

    /// Encode a local file as a data URL and make it the current source.
    pub fn set_source_from_file(&mut self, path: &Path) -> Result<()> {
        let data_url = DataUrl::from_file(path, self.max_source_bytes)?;
        self.set_source(data_url);
        Ok(())
    }

    /// Start a load of the current source. Any load still in flight is superseded.
    pub fn request_load(&mut self) -> LoadRequest {
        let (id, token) = self.ticketer.next();
        self.transition(Transition::LoadRequested(id));
        LoadRequest {
            id,
            source: self.state.source().to_string(),
            token,
        }
    }

    /// Apply a finished load. Returns `false` if it was superseded and ignored.
    pub fn complete_load(&mut self, outcome: LoadOutcome) -> bool {
        let LoadOutcome { id, result } = outcome;
        if !self.state.is_current(id) {
            tracing::debug!(id = id.0, "ignoring superseded load");
            return false;
        }

        let decoded = result.and_then(|image| {
            let natural = image.natural_size();
            FitGeometry::fit(natural, self.canvas.bounds())
                .map(|fit| (image, LoadedImage { natural, fit }))
                .ok_or(InspectorError::EmptyImage {
                    width: natural.width,
                    height: natural.height,
                })
        });

        match decoded {
            Ok((image, loaded)) => {
                self.canvas.draw(&image, &loaded.fit, self.filter);
                tracing::info!(
                    width = loaded.natural.width,
                    height = loaded.natural.height,
                    scaled_width = loaded.fit.scaled_width,
                    scaled_height = loaded.fit.scaled_height,
                    tainted = self.canvas.is_tainted(),
                    "image loaded"
                );
                self.transition(Transition::Loaded { id, image: loaded });
            }
            Err(InspectorError::Cancelled) => {
                tracing::debug!(id = id.0, "load cancelled");
                return false;
            }
            Err(e) => {
                tracing::warn!(id = id.0, error = %e, "failed to load image");
                self.transition(Transition::Failed {
                    id,
                    message: LOAD_FAILED_MESSAGE.to_string(),
                });
            }
        }
        true
    }

    /// Request, run and complete a load on the calling thread.
    pub fn load_with(&mut self, loader: &Loader) -> bool {
        let request = self.request_load();
        let outcome = loader.run(request);
        self.complete_load(outcome)
    }

    pub fn pointer_entered(&mut self) {
        self.transition(Transition::PointerEntered);
    }

    pub fn pointer_left(&mut self) {
        self.transition(Transition::PointerLeft);
    }

    /// Update the hover sample from a canvas-relative pointer position.
    /// Returns the sample taken, or `None` if readback failed.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Option<Sample> {
        let sample = self.sample_at(x, y)?;
        self.transition(Transition::PointerMoved(sample));
        Some(sample)
    }

    /// Latch the click sample from a canvas-relative pointer position.
    /// Returns the sample taken, or `None` if readback failed.
    pub fn pointer_clicked(&mut self, x: f32, y: f32) -> Option<Sample> {
        let sample = self.sample_at(x, y)?;
        self.transition(Transition::PointerClicked(sample));
        Some(sample)
    }

    fn sample_at(&self, x: f32, y: f32) -> Option<Sample> {
        match self.canvas.read_pixel(x, y) {
            Ok((color, coord)) => Some(Sample { color, coord }),
            Err(ReadbackError::NothingDrawn) => None,
            Err(e) => {
                tracing::debug!(x, y, error = %e, "failed to get pixel data");
                None
            }
        }
    }
}
