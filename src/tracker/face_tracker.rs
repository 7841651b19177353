//! Main face tracking engine.
//!
//! Haar-style face classifiers have a high false detection rate, so a region
//! must keep matching for several frames before it is treated as a real
//! face. New detections enter the candidate pool unmasked; once a candidate
//! accumulates enough matches it is promoted to the confirmed pool and gets
//! drawn with its assigned mask. Faces in either pool are dropped after
//! going unseen for too many frames. This mirrors how radar trackers decide
//! an object is real before committing to it.

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use crate::mask::MaskCatalog;
use crate::tracker::matching::{self, MatchingConfig};
use crate::tracker::rect::Rect;
use crate::tracker::tracked_face::TrackedFace;

/// Configuration for the face tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Drop a face (candidate or confirmed) unseen for more than this many frames
    pub expire_after_frames: u32,
    /// Promote a candidate once its detection count strictly exceeds this
    pub promote_after_detections: u32,
    /// Geometric matching tolerances
    pub matching: MatchingConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            expire_after_frames: 15,
            promote_after_detections: 8,
            matching: MatchingConfig::default(),
        }
    }
}

/// Errors from [`FaceTracker::process_frame`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    /// A detection rectangle had no positive extent. The call is rejected
    /// before any state changes.
    #[error("detection {index} has a degenerate bounding box ({width}x{height})")]
    DegenerateDetection {
        index: usize,
        width: i32,
        height: i32,
    },
}

/// Stateful face tracking engine.
///
/// Holds two ordered pools of [`TrackedFace`] records and applies a
/// three-phase update per frame: match-or-create, promote, expire. The
/// confirmed pool after each call is the authoritative output for drawing.
///
/// Single-threaded by design: one `process_frame` call runs to completion
/// before the next frame's detections are accepted. Each tracker owns its
/// id counter, so independent trackers produce independent id sequences.
pub struct FaceTracker {
    candidates: Vec<TrackedFace>,
    confirmed: Vec<TrackedFace>,
    catalog: MaskCatalog,
    config: TrackerConfig,
    next_id: u64,
}

impl FaceTracker {
    pub fn new(catalog: MaskCatalog, config: TrackerConfig) -> Self {
        Self {
            candidates: Vec::new(),
            confirmed: Vec::new(),
            catalog,
            config,
            next_id: 0,
        }
    }

    pub fn with_default_config(catalog: MaskCatalog) -> Self {
        Self::new(catalog, TrackerConfig::default())
    }

    /// Feed one frame's detections into the tracker.
    ///
    /// `frame_index` must increase monotonically but is taken literally:
    /// gaps from dropped frames widen the perceived absence of every face.
    ///
    /// Phases run strictly in order:
    /// 1. Each detection, in input order, updates the first matching face
    ///    (confirmed pool scanned before candidates) or creates a new
    ///    candidate with the next round-robin mask. A face matched in this
    ///    frame is not offered to later detections of the same frame.
    /// 2. Candidates over the promotion threshold move to the confirmed pool.
    /// 3. Faces unseen for too long are dropped from both pools.
    pub fn process_frame(
        &mut self,
        detections: &[Rect],
        frame_index: u32,
    ) -> Result<(), TrackError> {
        if let Some((index, rect)) = detections
            .iter()
            .enumerate()
            .find(|(_, rect)| rect.is_degenerate())
        {
            return Err(TrackError::DegenerateDetection {
                index,
                width: rect.width,
                height: rect.height,
            });
        }

        debug!(
            "frame {frame_index}: processing {} detections",
            detections.len()
        );

        let mut consumed: HashSet<u64> = HashSet::new();
        for detection in detections {
            if Self::match_in_pool(
                &mut self.confirmed,
                detection,
                frame_index,
                &self.config.matching,
                &mut consumed,
            ) {
                continue;
            }
            if Self::match_in_pool(
                &mut self.candidates,
                detection,
                frame_index,
                &self.config.matching,
                &mut consumed,
            ) {
                continue;
            }

            self.next_id += 1;
            let mask = self.catalog.next_assignment();
            debug!("frame {frame_index}: new candidate face {}", self.next_id);
            self.candidates
                .push(TrackedFace::new(self.next_id, *detection, mask, frame_index));
        }

        self.promote_candidates();
        self.expire_stale(frame_index);

        debug!(
            "frame {frame_index}: {} confirmed, {} candidate faces",
            self.confirmed.len(),
            self.candidates.len()
        );
        Ok(())
    }

    /// Confirmed faces, in promotion order. The authoritative set to mask.
    pub fn confirmed_faces(&self) -> &[TrackedFace] {
        &self.confirmed
    }

    /// Candidate faces not yet confirmed, in creation order.
    pub fn candidates(&self) -> &[TrackedFace] {
        &self.candidates
    }

    pub fn catalog(&self) -> &MaskCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Update the first face in `pool` matching `detection`, skipping faces
    /// already consumed by an earlier detection of this frame. First match
    /// wins; no best-match search.
    fn match_in_pool(
        pool: &mut [TrackedFace],
        detection: &Rect,
        frame_index: u32,
        config: &MatchingConfig,
        consumed: &mut HashSet<u64>,
    ) -> bool {
        for face in pool.iter_mut() {
            if consumed.contains(&face.id) {
                continue;
            }
            if matching::matches(detection, face, frame_index, config) {
                face.record_match(*detection, frame_index);
                consumed.insert(face.id);
                return true;
            }
        }
        false
    }

    /// Move candidates over the detection threshold into the confirmed
    /// pool, preserving order in both pools.
    fn promote_candidates(&mut self) {
        let threshold = self.config.promote_after_detections;
        let mut remaining = Vec::with_capacity(self.candidates.len());
        for face in self.candidates.drain(..) {
            if face.detection_count > threshold {
                debug!(
                    "face {}: confirmed after {} detections",
                    face.id, face.detection_count
                );
                self.confirmed.push(face);
            } else {
                remaining.push(face);
            }
        }
        self.candidates = remaining;
    }

    /// Drop faces from both pools once unseen past the expiry threshold.
    fn expire_stale(&mut self, frame_index: u32) {
        let limit = self.config.expire_after_frames;
        for pool in [&mut self.confirmed, &mut self.candidates] {
            pool.retain(|face| {
                let keep = face.frames_since_seen(frame_index) <= limit;
                if !keep {
                    debug!(
                        "face {}: expired, last seen at frame {}",
                        face.id, face.last_seen_frame
                    );
                }
                keep
            });
        }
    }
}
