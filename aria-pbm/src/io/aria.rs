//! ARIA `.map` reader.
//!
//! An ARIA map is a text file with a free-form header followed by typed
//! sections. Only the line-segment section is read:
//!
//! ```text
//! 2D-Map
//! MinPos: 0 -1200
//! ...
//! LINES
//! 0 -1200 7300 -1200
//! 7300 -1200 7300 2800
//! DATA
//! ...
//! ```
//!
//! The section starts after a line that is exactly the marker and ends at
//! the first line that is empty or does not start with an ASCII digit. Later
//! fields may be negative, but a record whose first field starts with `-`
//! ends the section.

use crate::config::DEFAULT_LINES_MARKER;
use crate::core::LineSegment;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::io::BufRead;
use std::path::PathBuf;

/// Outcome of reading the lines section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Segments in input order
    pub segments: Vec<LineSegment>,
    /// Records that did not yield four integers (missing fields read as 0)
    pub malformed: usize,
    /// 1-based line number of the marker
    pub marker_line: usize,
}

/// Read the segments of an ARIA map with the default `LINES` marker.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<LineSegment>> {
    Ok(parse_map(reader, DEFAULT_LINES_MARKER)?.segments)
}

/// Read the lines section that follows `marker`.
///
/// Fails with [`Error::LinesSectionNotFound`] if the stream ends before the
/// marker and with [`Error::NoLinesFound`] if the section is empty. The
/// returned error carries a `<stream>` path; callers that know the file
/// name replace it.
pub fn parse_map<R: BufRead>(mut reader: R, marker: &str) -> Result<ParseReport> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    // Header: skip until the marker line (newline included in the match)
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::LinesSectionNotFound {
                path: PathBuf::from("<stream>"),
            });
        }
        line_no += 1;
        if is_marker(&buf, marker) {
            break;
        }
    }

    let mut report = ParseReport {
        marker_line: line_no,
        ..Default::default()
    };

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        match buf.first() {
            Some(b) if b.is_ascii_digit() => {}
            _ => break,
        }

        let (values, scanned) = scan_record(&buf);
        if scanned < 4 {
            report.malformed += 1;
            warn!(
                "line {}: expected 4 integers, read {}; missing values set to 0",
                line_no, scanned
            );
        }
        report
            .segments
            .push(LineSegment::new(values[0], values[1], values[2], values[3]));
    }

    if report.segments.is_empty() {
        return Err(Error::NoLinesFound);
    }

    debug!(
        "Read {} segments after marker on line {} ({} malformed)",
        report.segments.len(),
        report.marker_line,
        report.malformed
    );

    Ok(report)
}

fn is_marker(line: &[u8], marker: &str) -> bool {
    line.strip_suffix(b"\n") == Some(marker.as_bytes())
}

/// Scan up to four integers the way `%d %d %d %d` does.
///
/// Scanning stops at the first field that is not an integer; that field and
/// every later one stay 0. Returns the values and how many were scanned.
fn scan_record(line: &[u8]) -> ([i32; 4], usize) {
    let mut values = [0i32; 4];
    let mut pos = 0;

    for (i, slot) in values.iter_mut().enumerate() {
        match scan_int(line, pos) {
            Some((value, next)) => {
                *slot = value;
                pos = next;
            }
            None => return (values, i),
        }
    }

    (values, 4)
}

/// Scan one integer starting at `pos`: skip whitespace, optional sign,
/// then at least one digit. Out-of-range values saturate.
fn scan_int(line: &[u8], mut pos: usize) -> Option<(i32, usize)> {
    while pos < line.len() && line[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let negative = match line.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let start = pos;
    let mut magnitude: i64 = 0;
    while let Some(d) = line.get(pos).filter(|b| b.is_ascii_digit()) {
        magnitude = (magnitude * 10 + (d - b'0') as i64).min(i32::MAX as i64 + 1);
        pos += 1;
    }
    if pos == start {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    Some((value.clamp(i32::MIN as i64, i32::MAX as i64) as i32, pos))
}
