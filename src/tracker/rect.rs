/// Axis-aligned bounding box in integer pixel coordinates (TLWH format).
///
/// Detections and tracked face positions both use this type. Coordinates may
/// be negative (a box can start off-frame after scaling); a valid detection
/// has strictly positive width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: i32,
    /// Top-left y coordinate
    pub y: i32,
    /// Width of the bounding box
    pub width: i32,
    /// Height of the bounding box
    pub height: i32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions.
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rightmost x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottommost y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Get the area of the bounding box.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// True if the box has no positive extent on either axis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Enlarge (or shrink) the box by `factor` around its center.
    ///
    /// Detectors return boxes tighter than the whole face, so masks are
    /// drawn over a scaled-up region. Integer arithmetic throughout: the new
    /// size is truncated and the origin shifted by half the size difference.
    pub fn scaled(&self, factor: f32) -> Rect {
        let new_width = (self.width as f32 * factor) as i32;
        let new_height = (self.height as f32 * factor) as i32;
        Rect {
            x: self.x - (new_width - self.width) / 2,
            y: self.y - (new_height - self.height) / 2,
            width: new_width,
            height: new_height,
        }
    }

    /// Truncate the box to fit inside a frame of the given dimensions.
    ///
    /// A box extending past the right/bottom edge is shortened; a box
    /// starting before the left/top edge loses the off-frame part and its
    /// origin moves to 0. A box entirely outside comes back with a
    /// non-positive extent, which callers should treat as nothing to draw.
    pub fn clamped_to(&self, frame_width: u32, frame_height: u32) -> Rect {
        let max_col = frame_width as i32;
        let max_row = frame_height as i32;
        let mut clamped = *self;

        if clamped.right() > max_col {
            clamped.width = max_col - clamped.x;
        }
        if clamped.bottom() > max_row {
            clamped.height = max_row - clamped.y;
        }
        if clamped.x < 0 {
            clamped.width += clamped.x;
            clamped.x = 0;
        }
        if clamped.y < 0 {
            clamped.height += clamped.y;
            clamped.y = 0;
        }
        clamped
    }
}
