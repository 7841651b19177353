//! Integration module for connecting face detection backends with the tracker.
//!
//! Provides the [`DetectionSource`] trait for plugging in any detector
//! (Haar cascade, neural network, ...) and [`MaskPipeline`] for running
//! detect, track, and mask overlay as one per-frame call.

mod detector;
mod pipeline;

pub use detector::DetectionSource;
pub use pipeline::{MaskPipeline, PipelineError};
