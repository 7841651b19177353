//! Compositing of mask images onto video frames.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::mask::catalog::MaskEntry;
use crate::tracker::Rect;

/// Draw a mask over a detected face region.
///
/// The target region is the face box enlarged by the mask's scale factor
/// around its center, then truncated to the frame bounds. The mask image is
/// resized to the truncated region (squashed, not cropped, when the region
/// is cut off at a frame edge) and copied pixel by pixel, skipping fully
/// transparent mask pixels. No alpha blending: a partially transparent mask
/// pixel replaces the frame pixel outright.
pub fn overlay_mask(frame: &mut RgbaImage, mask: &MaskEntry, face_box: Rect) {
    let region = face_box
        .scaled(mask.scale())
        .clamped_to(frame.width(), frame.height());
    if region.is_degenerate() {
        return;
    }

    let resized = imageops::resize(
        mask.image(),
        region.width as u32,
        region.height as u32,
        FilterType::Triangle,
    );

    for (col, row, pixel) in resized.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        frame.put_pixel(region.x as u32 + col, region.y as u32 + row, *pixel);
    }
}
