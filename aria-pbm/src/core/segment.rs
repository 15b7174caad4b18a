//! Integer line segment defined by its endpoints.

/// A line segment between `(x1, y1)` and `(x2, y2)`.
///
/// Coordinates are source map units (millimeters for ARIA maps) until the
/// segment has been passed through a
/// [`CoordinateTransform`](crate::transform::CoordinateTransform), after
/// which they are pixel indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    /// Create a segment from `(x1, y1)` to `(x2, y2)`.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// True if both endpoints coincide.
    ///
    /// Degenerate segments never mark any pixel.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    /// Inclusive X extent as `(min, max)`.
    #[inline]
    pub fn x_range(&self) -> (i32, i32) {
        (self.x1.min(self.x2), self.x1.max(self.x2))
    }

    /// Inclusive Y extent as `(min, max)`.
    #[inline]
    pub fn y_range(&self) -> (i32, i32) {
        (self.y1.min(self.y2), self.y1.max(self.y2))
    }

    /// True if `(x, y)` lies inside the segment's inclusive bounding box.
    #[inline]
    pub fn box_contains(&self, x: i64, y: i64) -> bool {
        let (xmin, xmax) = self.x_range();
        let (ymin, ymax) = self.y_range();
        x >= xmin as i64 && x <= xmax as i64 && y >= ymin as i64 && y <= ymax as i64
    }

    /// Unsigned collinearity measure of `(x, y)` against this segment.
    ///
    /// Computes `| |x-x1|*|y2-y1| - |x2-x1|*|y-y1| |`. This is the raw cross
    /// product of absolute deltas, not a Euclidean distance: it is zero on the
    /// supporting line and grows with both offset and segment length.
    #[inline]
    pub fn cross_magnitude(&self, x: i64, y: i64) -> i64 {
        let (x1, y1, x2, y2) = (
            self.x1 as i64,
            self.y1 as i64,
            self.x2 as i64,
            self.y2 as i64,
        );
        ((x - x1).abs() * (y2 - y1).abs() - (x2 - x1).abs() * (y - y1).abs()).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        assert!(LineSegment::new(3, 4, 3, 4).is_degenerate());
        assert!(!LineSegment::new(3, 4, 3, 5).is_degenerate());
        assert!(!LineSegment::new(3, 4, 2, 4).is_degenerate());
    }

    #[test]
    fn test_ranges_are_ordered() {
        let seg = LineSegment::new(10, -2, 4, 7);
        assert_eq!(seg.x_range(), (4, 10));
        assert_eq!(seg.y_range(), (-2, 7));
    }

    #[test]
    fn test_box_contains_is_inclusive() {
        let seg = LineSegment::new(0, 0, 10, 0);
        assert!(seg.box_contains(0, 0));
        assert!(seg.box_contains(10, 0));
        assert!(!seg.box_contains(11, 0));
        assert!(!seg.box_contains(5, 1));
        assert!(!seg.box_contains(-1, 0));
    }

    #[test]
    fn test_cross_magnitude() {
        // Points on the diagonal are exactly collinear
        let diag = LineSegment::new(0, 0, 10, 10);
        assert_eq!(diag.cross_magnitude(3, 3), 0);
        assert_eq!(diag.cross_magnitude(4, 3), 10);

        // Offset scales with segment length
        let shallow = LineSegment::new(0, 0, 40, 1);
        assert_eq!(shallow.cross_magnitude(0, 1), 40);
        let longer = LineSegment::new(0, 0, 41, 1);
        assert_eq!(longer.cross_magnitude(0, 1), 41);
    }

    #[test]
    fn test_cross_magnitude_no_overflow() {
        let seg = LineSegment::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        // Would overflow in i32 arithmetic
        assert_eq!(seg.cross_magnitude(0, 0), 0);
    }
}
