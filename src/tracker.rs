mod face_tracker;
mod matching;
mod rect;
mod tracked_face;

pub use face_tracker::{FaceTracker, TrackError, TrackerConfig};
pub use matching::{MatchTolerance, MatchingConfig};
pub use rect::Rect;
pub use tracked_face::TrackedFace;
