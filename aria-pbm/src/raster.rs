//! Segment rasterization.
//!
//! A pixel `(x, y)` is on when some non-degenerate segment passes both tests:
//!
//! 1. **Box test**: `x` in `[min(x1,x2), max(x1,x2)]` and `y` in
//!    `[min(y1,y2), max(y1,y2)]`, inclusive.
//! 2. **Collinearity test**:
//!    `| |x-x1|*|y2-y1| - |x2-x1|*|y-y1| | <= threshold`.
//!
//! The collinearity measure is an unnormalized cross product, so the
//! tolerance it grants widens with segment length. That slack absorbs the
//! dithering left by digitizing the source map.
//!
//! Every pixel is tested against every segment (`O(w * h * n)`). Pixels are
//! independent, so rows can be evaluated on the rayon pool with a result
//! identical to the sequential pass.

use crate::core::LineSegment;
use rayon::prelude::*;

// ============================================================================
// Bitmap
// ============================================================================

/// Row-major boolean image with origin at the top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Build a bitmap by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F: FnMut(usize, usize) -> bool>(width: usize, height: usize, mut f: F) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel value, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// Number of pixels that are on.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

// ============================================================================
// Rasterizer
// ============================================================================

/// Tests pixels against a segment set.
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    /// Maximum cross-product magnitude counted as on
    pub threshold: i64,
    /// Evaluate rows in parallel
    pub parallel: bool,
}

impl Rasterizer {
    /// Create a rasterizer with the given threshold.
    pub fn new(threshold: i64, parallel: bool) -> Self {
        Self {
            threshold,
            parallel,
        }
    }

    /// True if `segment` covers pixel `(x, y)`.
    #[inline]
    pub fn covers(&self, segment: &LineSegment, x: i64, y: i64) -> bool {
        !segment.is_degenerate()
            && segment.box_contains(x, y)
            && segment.cross_magnitude(x, y) <= self.threshold
    }

    /// True if any segment covers pixel `(x, y)`; stops at the first hit.
    #[inline]
    pub fn pixel_on(&self, segments: &[LineSegment], x: i64, y: i64) -> bool {
        segments.iter().any(|s| self.covers(s, x, y))
    }

    /// Rasterize `segments` (image coordinates) onto a `width x height` grid.
    pub fn rasterize(&self, segments: &[LineSegment], width: usize, height: usize) -> Bitmap {
        // Degenerate segments never match; drop them once instead of per pixel
        let live: Vec<LineSegment> = segments
            .iter()
            .filter(|s| !s.is_degenerate())
            .copied()
            .collect();

        let row = |y: usize| -> Vec<bool> {
            (0..width)
                .map(|x| self.pixel_on(&live, x as i64, y as i64))
                .collect()
        };

        let pixels: Vec<bool> = if self.parallel {
            (0..height)
                .into_par_iter()
                .map(row)
                .collect::<Vec<_>>()
                .concat()
        } else {
            (0..height).flat_map(row).collect()
        };

        Bitmap {
            width,
            height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LINE_THRESHOLD;

    fn sequential() -> Rasterizer {
        Rasterizer::new(DEFAULT_LINE_THRESHOLD, false)
    }

    #[test]
    fn test_single_horizontal_segment() {
        let bitmap = sequential().rasterize(&[LineSegment::new(0, 0, 1, 0)], 2, 1);
        assert_eq!(bitmap.get(0, 0), Some(true));
        assert_eq!(bitmap.get(1, 0), Some(true));
        assert_eq!(bitmap.get(2, 0), None);
    }

    #[test]
    fn test_box_reject_precedes_threshold() {
        // |5*0 - 10*y| <= 40 holds for |y| <= 4, but the box only admits y = 0
        let seg = LineSegment::new(0, 0, 10, 0);
        let r = sequential();
        assert!(r.covers(&seg, 5, 0));
        for y in 1..=4 {
            assert_eq!(seg.cross_magnitude(5, y), 10 * y);
            assert!(!r.covers(&seg, 5, y));
        }

        let bitmap = r.rasterize(&[seg], 11, 5);
        assert_eq!(bitmap.count_on(), 11);
        assert!((0..11).all(|x| bitmap.get(x, 0) == Some(true)));
    }

    #[test]
    fn test_threshold_boundary() {
        let r = sequential();

        let at_limit = LineSegment::new(0, 0, 40, 1);
        assert_eq!(at_limit.cross_magnitude(0, 1), 40);
        assert!(r.covers(&at_limit, 0, 1));

        let past_limit = LineSegment::new(0, 0, 41, 1);
        assert_eq!(past_limit.cross_magnitude(0, 1), 41);
        assert!(!r.covers(&past_limit, 0, 1));
    }

    #[test]
    fn test_degenerate_segment_never_drawn() {
        let r = sequential();
        let point = LineSegment::new(2, 2, 2, 2);
        assert!(!r.covers(&point, 2, 2));

        let bitmap = r.rasterize(&[point], 5, 5);
        assert_eq!(bitmap.count_on(), 0);
    }

    #[test]
    fn test_vertical_and_diagonal() {
        let segments = [LineSegment::new(0, 0, 0, 4), LineSegment::new(0, 0, 4, 4)];
        let bitmap = Rasterizer::new(0, false).rasterize(&segments, 5, 5);

        for i in 0..5 {
            assert_eq!(bitmap.get(0, i), Some(true));
            assert_eq!(bitmap.get(i, i), Some(true));
        }
        assert_eq!(bitmap.get(3, 1), Some(false));
        assert_eq!(bitmap.count_on(), 9);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let segments = [
            LineSegment::new(0, 0, 63, 0),
            LineSegment::new(63, 0, 63, 47),
            LineSegment::new(3, 5, 60, 41),
            LineSegment::new(50, 2, 7, 30),
            LineSegment::new(10, 10, 10, 10),
        ];
        let seq = sequential().rasterize(&segments, 64, 48);
        let par = Rasterizer::new(DEFAULT_LINE_THRESHOLD, true).rasterize(&segments, 64, 48);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_rows_layout() {
        let bitmap = Bitmap::from_fn(3, 2, |x, y| x + y == 2);
        let rows: Vec<&[bool]> = bitmap.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[false, false, true]);
        assert_eq!(rows[1], &[false, true, false]);
    }
}
