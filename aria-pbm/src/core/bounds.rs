//! Axis-aligned bounds of a segment set.

use super::LineSegment;

/// Inclusive extent of every endpoint in a segment set.
///
/// Invariant: `xmin <= x <= xmax` and `ymin <= y <= ymax` for every endpoint
/// of every segment the bounds were computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
}

impl Bounds {
    /// Compute bounds over both endpoints of every segment.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_segments(segments: &[LineSegment]) -> Option<Self> {
        let first = segments.first()?;
        let (xmin, xmax) = first.x_range();
        let (ymin, ymax) = first.y_range();
        let init = Bounds {
            xmin,
            xmax,
            ymin,
            ymax,
        };

        Some(segments[1..].iter().fold(init, |b, seg| {
            let (sxmin, sxmax) = seg.x_range();
            let (symin, symax) = seg.y_range();
            Bounds {
                xmin: b.xmin.min(sxmin),
                xmax: b.xmax.max(sxmax),
                ymin: b.ymin.min(symin),
                ymax: b.ymax.max(symax),
            }
        }))
    }

    /// Horizontal span `xmax - xmin` in source units.
    #[inline]
    pub fn width(&self) -> i64 {
        self.xmax as i64 - self.xmin as i64
    }

    /// Vertical span `ymax - ymin` in source units.
    #[inline]
    pub fn height(&self) -> i64 {
        self.ymax as i64 - self.ymin as i64
    }

    /// True if `(x, y)` lies inside the bounds (inclusive).
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }
}
