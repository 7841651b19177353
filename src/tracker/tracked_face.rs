//! A single tracked face and its detection history.

use std::time::Instant;

use log::debug;

use crate::mask::MaskAssignment;
use crate::tracker::rect::Rect;

/// One tracked face region.
///
/// Identity (`id`) and the assigned mask are fixed for the whole life of the
/// record; position and detection statistics update on every match. Records
/// live in exactly one of the tracker's two pools (candidate or confirmed)
/// and are dropped once unseen for too long.
#[derive(Debug, Clone)]
pub struct TrackedFace {
    /// Unique face identifier, never reused
    pub id: u64,
    /// Most recent matched bounding box
    pub last_position: Rect,
    /// Frame index of the most recent match
    pub last_seen_frame: u32,
    /// Number of detections matched to this face, including creation
    pub detection_count: u32,
    /// Mask overlay assigned at creation
    pub mask: MaskAssignment,
    last_seen_at: Instant,
}

impl TrackedFace {
    /// Create a record from a first detection. The id comes from the
    /// tracker's allocator; `detection_count` starts at 1.
    pub(crate) fn new(id: u64, initial_box: Rect, mask: MaskAssignment, frame_index: u32) -> Self {
        Self {
            id,
            last_position: initial_box,
            last_seen_frame: frame_index,
            detection_count: 1,
            mask,
            last_seen_at: Instant::now(),
        }
    }

    /// Number of frames since this face last matched a detection.
    #[inline]
    pub fn frames_since_seen(&self, current_frame: u32) -> u32 {
        current_frame.saturating_sub(self.last_seen_frame)
    }

    /// Milliseconds since this face last matched a detection.
    ///
    /// Wall-clock alternative to [`frames_since_seen`](Self::frames_since_seen);
    /// the frame count is what expiry actually uses.
    pub fn ms_since_seen(&self) -> u128 {
        self.last_seen_at.elapsed().as_millis()
    }

    /// Fold a matching detection into this record.
    pub(crate) fn record_match(&mut self, new_box: Rect, frame_index: u32) {
        self.last_position = new_box;
        self.last_seen_frame = frame_index;
        self.last_seen_at = Instant::now();
        self.detection_count += 1;
        debug!("face {}: {} detections", self.id, self.detection_count);
    }
}
