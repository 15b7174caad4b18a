//! # aria-pbm: ARIA line maps to plain PBM
//!
//! Converts the line-segment section of an ARIA `.map` file (the map format
//! used by MobileRobots/ARIA navigation tools) into an ASCII portable bitmap.
//!
//! ## Pipeline
//!
//! ```text
//!   .map text ──► parse ──► Bounds ──► CoordinateTransform ──► Rasterizer ──► P1
//!               io::aria    core        transform              raster        io::pbm
//! ```
//!
//! Each stage runs once, front to back. All failures are fatal and reported
//! through [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use aria_pbm::{ConvertConfig, rasterize_map};
//!
//! let map = "2D-Map\nLINES\n0 0 10 0\n";
//! let bitmap = rasterize_map(map.as_bytes(), &ConvertConfig::default()).unwrap();
//! assert_eq!((bitmap.width(), bitmap.height()), (2, 1));
//! assert_eq!(bitmap.count_on(), 2);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod raster;
pub mod transform;

pub use config::ConvertConfig;
pub use crate::core::{Bounds, LineSegment};
pub use error::{Error, Result};
pub use raster::{Bitmap, Rasterizer};
pub use transform::CoordinateTransform;

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Statistics from a completed file conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Segments read from the lines section
    pub segments: usize,
    /// Records with missing or non-numeric fields
    pub malformed: usize,
    /// Source bounds before transformation
    pub bounds: Bounds,
    /// Output image width in pixels
    pub width: usize,
    /// Output image height in pixels
    pub height: usize,
    /// Pixels set in the output image
    pub pixels_on: usize,
}

/// Parse an ARIA map from `reader` and rasterize it.
pub fn rasterize_map<R: BufRead>(reader: R, config: &ConvertConfig) -> Result<Bitmap> {
    let report = io::parse_map(reader, &config.lines_marker)?;
    let (bitmap, _) = render(&report.segments, config)?;
    Ok(bitmap)
}

/// Run bounds, transform and rasterization over parsed source segments.
fn render(segments: &[LineSegment], config: &ConvertConfig) -> Result<(Bitmap, Bounds)> {
    let bounds = Bounds::from_segments(segments).ok_or(Error::NoLinesFound)?;
    debug!(
        "Source bounds: x [{}, {}], y [{}, {}]",
        bounds.xmin, bounds.xmax, bounds.ymin, bounds.ymax
    );

    let transform = CoordinateTransform::new(&bounds, config.resolution);
    let image_segments = transform.apply_all(segments);
    debug!("Image size: {}x{}", transform.width(), transform.height());

    let start = Instant::now();
    let rasterizer = Rasterizer::new(config.line_threshold, config.parallel);
    let bitmap = rasterizer.rasterize(&image_segments, transform.width(), transform.height());
    debug!(
        "Rasterized {} segments in {:.1}ms",
        image_segments.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok((bitmap, bounds))
}

/// Convert the ARIA map at `input` into a plain PBM at `output`.
///
/// Both files are opened before parsing starts, so a map without a lines
/// section still leaves an empty (truncated) output file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConvertConfig,
) -> Result<ConversionSummary> {
    let map_file = File::open(input).map_err(|source| Error::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let image_file = File::create(output).map_err(|source| Error::OpenOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let report = io::parse_map(BufReader::new(map_file), &config.lines_marker).map_err(
        |e| match e {
            Error::LinesSectionNotFound { .. } => Error::LinesSectionNotFound {
                path: PathBuf::from(input),
            },
            other => other,
        },
    )?;
    info!(
        "Read {} segments from {}",
        report.segments.len(),
        input.display()
    );

    let (bitmap, bounds) = render(&report.segments, config)?;

    let mut writer = BufWriter::new(image_file);
    io::write_pbm(&mut writer, &bitmap)?;
    writer.flush()?;
    info!(
        "Wrote {}x{} bitmap to {}",
        bitmap.width(),
        bitmap.height(),
        output.display()
    );

    Ok(ConversionSummary {
        segments: report.segments.len(),
        malformed: report.malformed,
        bounds,
        width: bitmap.width(),
        height: bitmap.height(),
        pixels_on: bitmap.count_on(),
    })
}
