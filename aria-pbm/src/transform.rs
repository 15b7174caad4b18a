//! Source-to-image coordinate transform.
//!
//! ARIA maps use a Y-up frame with arbitrary origin; PBM rows run top to
//! bottom from pixel `(0, 0)`. The transform:
//!
//! 1. translates so the minimum corner of the bounds becomes `(0, 0)`
//! 2. flips Y about the vertical span: `y' = (ymax - ymin) - y`
//! 3. scales by the resolution and truncates each coordinate toward zero
//!
//! ```text
//!   source (Y up)                      image (Y down)
//!   ymax ┌────────┐                 0 ┌────────┐
//!        │        │       ──►         │        │
//!   ymin └────────┘              h-1  └────────┘
//!       xmin     xmax                 0       w-1
//! ```

use crate::core::{Bounds, LineSegment};

/// Maps source coordinates inside a [`Bounds`] to pixel indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    xmin: i64,
    ymin: i64,
    /// `ymax - ymin` in source units
    span_y: i64,
    /// Pixels per source unit
    resolution: f64,
    width: usize,
    height: usize,
}

impl CoordinateTransform {
    /// Build the transform for `bounds` at `resolution` pixels per source unit.
    pub fn new(bounds: &Bounds, resolution: f64) -> Self {
        // Same translate and scale as the segments, no flip
        let width = scale(bounds.width(), resolution).max(0) as usize + 1;
        let height = scale(bounds.height(), resolution).max(0) as usize + 1;

        Self {
            xmin: bounds.xmin as i64,
            ymin: bounds.ymin as i64,
            span_y: bounds.height(),
            resolution,
            width,
            height,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Map a source point to pixel coordinates.
    #[inline]
    pub fn to_image(&self, x: i32, y: i32) -> (i32, i32) {
        let tx = x as i64 - self.xmin;
        let ty = self.span_y - (y as i64 - self.ymin);
        (scale(tx, self.resolution), scale(ty, self.resolution))
    }

    /// Map a pixel back to source coordinates.
    ///
    /// Inverse of [`to_image`](Self::to_image) up to truncation: the result
    /// is the source position of the pixel's top-left corner.
    pub fn to_source(&self, px: i32, py: i32) -> (f64, f64) {
        let x = px as f64 / self.resolution + self.xmin as f64;
        let y = (self.span_y as f64 - py as f64 / self.resolution) + self.ymin as f64;
        (x, y)
    }

    /// Transform both endpoints of a segment.
    #[inline]
    pub fn apply(&self, segment: &LineSegment) -> LineSegment {
        let (x1, y1) = self.to_image(segment.x1, segment.y1);
        let (x2, y2) = self.to_image(segment.x2, segment.y2);
        LineSegment::new(x1, y1, x2, y2)
    }

    /// Transform every segment, preserving order.
    pub fn apply_all(&self, segments: &[LineSegment]) -> Vec<LineSegment> {
        segments.iter().map(|s| self.apply(s)).collect()
    }
}

/// Multiply by the resolution and truncate toward zero.
#[inline]
fn scale(value: i64, resolution: f64) -> i32 {
    (value as f64 * resolution).trunc() as i32
}
