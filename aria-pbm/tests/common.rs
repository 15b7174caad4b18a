//! Test utilities for aria-pbm integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A small ARIA map: a 7.3m x 4m room with a doorway and an inner wall.
///
/// Every record starts with a digit; negative values only appear in later
/// fields, since a leading `-` would end the lines section.
pub const OFFICE_MAP: &str = "\
2D-Map
MinPos: 0 -1200
MaxPos: 7300 2800
NumPoints: 3
LineMinPos: 0 -1200
LineMaxPos: 7300 2800
NumLines: 6
Cairn: RobotHome 3100 0 0.0 \"\" ICON \"home\"
LINES
0 -1200 7300 -1200
7300 -1200 7300 2800
7300 2800 0 2800
0 2800 0 800
0 -200 0 -1200
3600 -1200 3600 1500
DATA
0 -1200
7300 2800
3600 500
";

/// Rectangle 40 x 30 source units, rasterizes to a 5 x 4 outline.
pub const RECTANGLE_MAP: &str = "LINES\n0 0 40 0\n40 0 40 30\n0 30 40 30\n0 0 0 30\n";

/// Expected PBM for [`RECTANGLE_MAP`].
pub const RECTANGLE_PBM: &str = "P1\n#\n5 4\n\
1 1 1 1 1 \n\
1 0 0 0 1 \n\
1 0 0 0 1 \n\
1 1 1 1 1 \n";

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write test fixture");
    path
}

/// Decoded plain PBM.
#[derive(Debug, PartialEq)]
pub struct Pbm {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<u8>>,
}

impl Pbm {
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.rows[y][x]
    }

    pub fn count_on(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 1).count()
    }
}

/// Parse the `P1` layout produced by the writer.
pub fn parse_pbm(text: &str) -> Pbm {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P1"));
    assert_eq!(lines.next(), Some("#"));

    let dims: Vec<usize> = lines
        .next()
        .expect("dimension line")
        .split_whitespace()
        .map(|v| v.parse().expect("dimension"))
        .collect();
    let (width, height) = (dims[0], dims[1]);

    let rows: Vec<Vec<u8>> = lines
        .map(|line| {
            assert!(line.ends_with(' '), "row should end with a space");
            line.split_whitespace()
                .map(|v| v.parse().expect("pixel"))
                .collect()
        })
        .collect();

    assert_eq!(rows.len(), height);
    assert!(rows.iter().all(|r| r.len() == width));

    Pbm {
        width,
        height,
        rows,
    }
}
