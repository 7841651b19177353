//! Geometric matching between incoming detections and tracked faces.
//!
//! Matching uses only geometry: how far a detection moved and how much it
//! resized relative to where the face was last seen. Pixel content is never
//! consulted. Two tolerance tiers apply, keyed by how recently the face was
//! seen: a face seen within the last few frames is expected to have moved
//! and resized little, while one unseen for longer is allowed more drift
//! before being treated as a different object. That trades some false-match
//! risk for tracking continuity across brief occlusions.

use log::trace;

use crate::tracker::rect::Rect;
use crate::tracker::tracked_face::TrackedFace;

/// One tolerance tier: allowed size change and position shift.
///
/// Size ratios are `detection / last_seen` per axis and must fall inside
/// `[min_size_ratio, max_size_ratio]` (inclusive). Position shifts are
/// measured relative to the last seen size (`|dx| / width`, `|dy| / height`)
/// and must not exceed `max_shift_ratio`.
#[derive(Debug, Clone, Copy)]
pub struct MatchTolerance {
    pub min_size_ratio: f32,
    pub max_size_ratio: f32,
    pub max_shift_ratio: f32,
}

/// Two-tier matching configuration.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Gap (in frames) up to which the strict `recent` tier applies
    pub recent_gap_frames: u32,
    /// Tolerances for faces seen within `recent_gap_frames`
    pub recent: MatchTolerance,
    /// Tolerances for faces unseen for longer. There is deliberately no
    /// upper gap cutoff here: a face one frame from expiry gets the same
    /// tolerance as one unseen for six frames.
    pub stale: MatchTolerance,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            recent_gap_frames: 5,
            recent: MatchTolerance {
                min_size_ratio: 0.9,
                max_size_ratio: 1.11,
                max_shift_ratio: 0.75,
            },
            stale: MatchTolerance {
                min_size_ratio: 0.7,
                max_size_ratio: 1.43,
                max_shift_ratio: 1.5,
            },
        }
    }
}

/// Does `detection` plausibly continue `face` at `frame_index`?
///
/// Size is checked before position shift, so the trace output names the
/// first violated constraint; the boolean result does not depend on order.
pub(crate) fn matches(
    detection: &Rect,
    face: &TrackedFace,
    frame_index: u32,
    config: &MatchingConfig,
) -> bool {
    let last = &face.last_position;
    let gap = face.frames_since_seen(frame_index);
    let tolerance = if gap <= config.recent_gap_frames {
        &config.recent
    } else {
        &config.stale
    };

    let width_ratio = detection.width as f32 / last.width as f32;
    let height_ratio = detection.height as f32 / last.height as f32;
    let dx_ratio = (detection.x - last.x).abs() as f32 / last.width as f32;
    let dy_ratio = (detection.y - last.y).abs() as f32 / last.height as f32;

    trace!(
        "face {}: gap {gap}, shift x {dx_ratio:.2} y {dy_ratio:.2}, \
         size w {width_ratio:.2} h {height_ratio:.2}",
        face.id
    );

    if width_ratio < tolerance.min_size_ratio
        || width_ratio > tolerance.max_size_ratio
        || height_ratio < tolerance.min_size_ratio
        || height_ratio > tolerance.max_size_ratio
    {
        trace!("face {}: no match, size off", face.id);
        return false;
    }

    if dx_ratio > tolerance.max_shift_ratio || dy_ratio > tolerance.max_shift_ratio {
        trace!("face {}: no match, moved too far", face.id);
        return false;
    }

    true
}
