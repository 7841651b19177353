//! Face tracking and mask overlay for live video streams.
//!
//! Face detectors are noisy: they emit per-frame bounding boxes with no
//! identity, miss faces for a few frames, and fire on things that are not
//! faces at all. This crate turns that stream into a stable set of
//! persistent, identified faces and overlays a fixed image mask on each one.
//!
//! New detections enter a candidate pool and must keep matching across
//! frames before they are confirmed; confirmed faces keep their identity and
//! their assigned mask until they go unseen for too long. Matching is purely
//! geometric (position and size relative to where the face was last seen),
//! with a strict tolerance for recently seen faces and a looser one for
//! faces briefly lost to occlusion.
//!
//! Detection itself stays behind the [`DetectionSource`] trait; wire any
//! backend into a [`MaskPipeline`] to get end-to-end detect, track, and
//! overlay per frame.

pub mod integration;
pub mod mask;
pub mod tracker;

pub use integration::{DetectionSource, MaskPipeline, PipelineError};
pub use mask::{
    CatalogBuilder, CatalogError, MaskAssignment, MaskCatalog, MaskEntry, MaskHandle, overlay_mask,
};
pub use tracker::{
    FaceTracker, MatchTolerance, MatchingConfig, Rect, TrackError, TrackedFace, TrackerConfig,
};
