//! Map input and image output.
//!
//! - [`aria`]: reads the line-segment section of ARIA `.map` files
//! - [`pbm`]: writes plain (ASCII, `P1`) portable bitmaps

pub mod aria;
pub mod pbm;

pub use aria::{ParseReport, parse_lines, parse_map};
pub use pbm::write_pbm;
