use facemask_rs::{FaceTracker, MaskCatalog, MaskEntry, Rect, TrackerConfig};
use image::RgbaImage;

fn catalog(n: usize) -> MaskCatalog {
    let entries = (0..n)
        .map(|i| MaskEntry::new(RgbaImage::new(1, 1), 1.0 + i as f32 / 10.0))
        .collect();
    MaskCatalog::new(entries).unwrap()
}

#[test]
fn test_single_face_lifecycle() {
    let mut tracker = FaceTracker::new(catalog(4), TrackerConfig::default());

    // Frame 0: one detection becomes a candidate, not yet drawn.
    tracker.process_frame(&[Rect::new(10, 10, 50, 50)], 0).unwrap();
    assert!(tracker.confirmed_faces().is_empty());
    assert_eq!(tracker.candidates().len(), 1);
    assert_eq!(tracker.candidates()[0].id, 1);
    assert_eq!(tracker.candidates()[0].detection_count, 1);

    // Frame 1: a jittered detection within the recent tolerance matches.
    tracker.process_frame(&[Rect::new(12, 11, 51, 49)], 1).unwrap();
    assert_eq!(tracker.candidates().len(), 1);
    assert_eq!(tracker.candidates()[0].detection_count, 2);
    assert_eq!(tracker.candidates()[0].last_position, Rect::new(12, 11, 51, 49));

    // Keep matching through frame 8: detection_count reaches 9, which
    // strictly exceeds the promotion threshold of 8.
    for frame in 2..=8 {
        tracker.process_frame(&[Rect::new(12, 11, 51, 49)], frame).unwrap();
    }
    assert!(tracker.candidates().is_empty());
    assert_eq!(tracker.confirmed_faces().len(), 1);
    let face = &tracker.confirmed_faces()[0];
    assert_eq!(face.id, 1);
    assert_eq!(face.detection_count, 9);

    // The confirmed face survives 15 frames of absence after frame 8...
    tracker.process_frame(&[], 23).unwrap();
    assert_eq!(tracker.confirmed_faces().len(), 1);

    // ...and is gone after 16.
    tracker.process_frame(&[], 24).unwrap();
    assert!(tracker.confirmed_faces().is_empty());
}

#[test]
fn test_identity_persists_across_brief_occlusion() {
    let mut tracker = FaceTracker::new(catalog(2), TrackerConfig::default());
    for frame in 0..9 {
        tracker.process_frame(&[Rect::new(100, 100, 80, 80)], frame).unwrap();
    }
    let id = tracker.confirmed_faces()[0].id;

    // Unseen for 7 frames, then reappears drifted and resized beyond the
    // recent tolerance but within the stale one.
    tracker
        .process_frame(&[Rect::new(160, 140, 100, 100)], 15)
        .unwrap();

    assert_eq!(tracker.confirmed_faces().len(), 1);
    assert_eq!(tracker.confirmed_faces()[0].id, id);
    assert_eq!(tracker.confirmed_faces()[0].detection_count, 10);
}

#[test]
fn test_reappearance_after_expiry_gets_a_new_id() {
    let mut tracker = FaceTracker::new(catalog(2), TrackerConfig::default());
    tracker.process_frame(&[Rect::new(10, 10, 50, 50)], 0).unwrap();
    assert_eq!(tracker.candidates()[0].id, 1);

    // An empty frame past the expiry threshold purges the record. Without
    // it the stale tier, which has no upper gap cutoff, would still match
    // the old record at frame 40 before the expiry phase ran.
    tracker.process_frame(&[], 20).unwrap();
    assert!(tracker.candidates().is_empty());

    // The same box is now a brand new face.
    tracker.process_frame(&[Rect::new(10, 10, 50, 50)], 40).unwrap();
    assert_eq!(tracker.candidates().len(), 1);
    assert_eq!(tracker.candidates()[0].id, 2);
    assert_eq!(tracker.candidates()[0].detection_count, 1);
}

#[test]
fn test_first_match_wins_between_overlapping_faces() {
    let mut tracker = FaceTracker::new(catalog(2), TrackerConfig::default());

    // Two candidates far enough apart not to match each other.
    tracker
        .process_frame(&[Rect::new(0, 0, 100, 100), Rect::new(200, 200, 100, 100)], 0)
        .unwrap();
    assert_eq!(tracker.candidates().len(), 2);

    // At frame 6 both are stale; a detection midway satisfies the loose
    // tolerance for both. Only the first face in the pool may claim it.
    tracker
        .process_frame(&[Rect::new(100, 100, 100, 100)], 6)
        .unwrap();

    assert_eq!(tracker.candidates()[0].detection_count, 2);
    assert_eq!(tracker.candidates()[0].last_position, Rect::new(100, 100, 100, 100));
    assert_eq!(tracker.candidates()[1].detection_count, 1);
}

#[test]
fn test_pool_exclusivity_and_distinct_ids() {
    let mut tracker = FaceTracker::new(catalog(3), TrackerConfig::default());

    // One face that will be confirmed, one that stays a candidate.
    for frame in 0..9 {
        let mut detections = vec![Rect::new(0, 0, 60, 60)];
        if frame >= 6 {
            detections.push(Rect::new(400, 400, 60, 60));
        }
        tracker.process_frame(&detections, frame).unwrap();
    }

    assert_eq!(tracker.confirmed_faces().len(), 1);
    assert_eq!(tracker.candidates().len(), 1);

    let confirmed_ids: Vec<u64> = tracker.confirmed_faces().iter().map(|f| f.id).collect();
    let candidate_ids: Vec<u64> = tracker.candidates().iter().map(|f| f.id).collect();
    assert!(confirmed_ids.iter().all(|id| !candidate_ids.contains(id)));
    assert_eq!(confirmed_ids, vec![1]);
    assert_eq!(candidate_ids, vec![2]);
}

#[test]
fn test_masks_cycle_round_robin_across_new_faces() {
    let mut tracker = FaceTracker::new(catalog(3), TrackerConfig::default());

    // Five well-separated faces appearing at once.
    let detections: Vec<Rect> = (0..5)
        .map(|i| Rect::new(i * 300, 0, 50, 50))
        .collect();
    tracker.process_frame(&detections, 0).unwrap();

    // Catalog scales are 1.0, 1.1, 1.2; the k-th assignment is entry k % 3.
    let scales: Vec<f32> = tracker.candidates().iter().map(|f| f.mask.scale).collect();
    assert_eq!(scales, vec![1.1, 1.2, 1.0, 1.1, 1.2]);
}

#[test]
fn test_tunable_thresholds() {
    let config = TrackerConfig {
        expire_after_frames: 2,
        promote_after_detections: 1,
        ..TrackerConfig::default()
    };
    let mut tracker = FaceTracker::new(catalog(1), config);

    tracker.process_frame(&[Rect::new(10, 10, 50, 50)], 0).unwrap();
    tracker.process_frame(&[Rect::new(10, 10, 50, 50)], 1).unwrap();
    assert_eq!(tracker.confirmed_faces().len(), 1);

    tracker.process_frame(&[], 4).unwrap();
    assert!(tracker.confirmed_faces().is_empty());
}
