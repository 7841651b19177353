//! MaskPipeline for combining detection, tracking, and mask overlay.

use image::RgbaImage;
use thiserror::Error;

use crate::mask::overlay_mask;
use crate::tracker::{FaceTracker, TrackError};

use super::DetectionSource;

/// Errors from [`MaskPipeline::process_frame`].
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    #[error("face detection failed: {0}")]
    Detection(E),
    #[error(transparent)]
    Track(#[from] TrackError),
}

/// End-to-end per-frame processing: detect faces, update the tracker, and
/// draw the assigned mask over every confirmed face.
///
/// The pipeline owns the frame counter: it starts at 0 and advances once
/// per processed frame. Candidates are tracked but never drawn.
pub struct MaskPipeline<D: DetectionSource> {
    detector: D,
    tracker: FaceTracker,
    frame_index: u32,
}

impl<D: DetectionSource> MaskPipeline<D> {
    /// Create a new pipeline from a detector and a configured tracker.
    pub fn new(detector: D, tracker: FaceTracker) -> Self {
        Self {
            detector,
            tracker,
            frame_index: 0,
        }
    }

    /// Process one frame in place and return how many faces were masked.
    ///
    /// Runs detection on the frame, feeds the detections to the tracker,
    /// then overlays each confirmed face's mask at its last seen position.
    pub fn process_frame(&mut self, frame: &mut RgbaImage) -> Result<usize, PipelineError<D::Error>> {
        let detections = self
            .detector
            .detect(frame)
            .map_err(PipelineError::Detection)?;
        self.tracker.process_frame(&detections, self.frame_index)?;
        self.frame_index += 1;

        for face in self.tracker.confirmed_faces() {
            let entry = self.tracker.catalog().entry(face.mask.handle);
            overlay_mask(frame, entry, face.last_position);
        }
        Ok(self.tracker.confirmed_faces().len())
    }

    /// Index the next frame will be processed under.
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &FaceTracker {
        &self.tracker
    }
}
