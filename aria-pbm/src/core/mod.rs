//! Core geometry types.
//!
//! - [`LineSegment`]: integer segment in source or image coordinates
//! - [`Bounds`]: axis-aligned extent of a segment set

mod bounds;
mod segment;

pub use bounds::Bounds;
pub use segment::LineSegment;
