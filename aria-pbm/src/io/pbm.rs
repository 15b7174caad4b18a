//! Plain PBM (`P1`) writer.
//!
//! Layout:
//!
//! ```text
//! P1
//! #
//! <width> <height>
//! 0 1 1 0 ...
//! ```
//!
//! Every pixel value is followed by a single space, including the last one on
//! a row, and each row ends with a newline.

use crate::raster::Bitmap;
use std::io::Write;

/// Write `bitmap` as plain PBM.
///
/// The writer is not flushed; wrap files in a `BufWriter` and flush it.
pub fn write_pbm<W: Write>(writer: &mut W, bitmap: &Bitmap) -> std::io::Result<()> {
    write!(writer, "P1\n#\n{} {}\n", bitmap.width(), bitmap.height())?;

    let mut row_text = Vec::with_capacity(bitmap.width() * 2 + 1);
    for row in bitmap.rows() {
        row_text.clear();
        for &on in row {
            row_text.extend_from_slice(if on { b"1 " } else { b"0 " });
        }
        row_text.push(b'\n');
        writer.write_all(&row_text)?;
    }

    Ok(())
}
