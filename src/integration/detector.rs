//! Trait for face detection backends.

use image::RgbaImage;

use crate::tracker::Rect;

/// Trait for face detection backends.
///
/// Implement this to connect any per-frame face detector (Haar cascade,
/// neural network, ...) to the tracking pipeline. Detections carry no
/// identity and no ordering guarantee beyond being stable within one call;
/// the tracker supplies continuity across frames.
///
/// # Example
///
/// ```ignore
/// use facemask_rs::{DetectionSource, Rect};
/// use image::RgbaImage;
///
/// struct MyDetector {
///     // Your classifier here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, frame: &RgbaImage) -> Result<Vec<Rect>, Self::Error> {
///         // Run the classifier and return candidate face boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Find candidate face bounding boxes in one frame.
    fn detect(&mut self, frame: &RgbaImage) -> Result<Vec<Rect>, Self::Error>;
}
