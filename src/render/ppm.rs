//! Binary PPM (`P6`) encoding.
//!
//! ```text
//! P6\n
//! <size> <size>\n
//! 1\n
//! R G B R G B ...   (size × size × 3 bytes, each 0 or 1)
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::compositor::Frame;
use super::pixel::MAX_CHANNEL;
use crate::error::{PiError, PiResult};

/// Magic number of the binary RGB pixel-map variant.
pub const MAGIC: &str = "P6";

/// Header for a square image of side `size`.
#[must_use]
pub fn header(size: usize) -> String {
    format!("{MAGIC}\n{size} {size}\n{MAX_CHANNEL}\n")
}

/// Write `frame` as binary PPM to `writer`.
///
/// # Errors
///
/// Returns error if the writer fails.
pub fn write_to<W: Write>(frame: &Frame, mut writer: W) -> PiResult<()> {
    writer.write_all(header(frame.size()).as_bytes())?;
    for pixel in frame.pixels() {
        writer.write_all(&pixel.channels())?;
    }
    Ok(())
}

/// Encode `frame` into an in-memory buffer.
#[must_use]
pub fn encode(frame: &Frame) -> Vec<u8> {
    let head = header(frame.size());
    let mut bytes = Vec::with_capacity(head.len() + frame.pixels().len() * 3);
    bytes.extend_from_slice(head.as_bytes());
    for pixel in frame.pixels() {
        bytes.extend_from_slice(&pixel.channels());
    }
    bytes
}

/// Write `frame` to the file at `path`, replacing it if it exists.
///
/// # Errors
///
/// Returns [`PiError::Io`] if the file cannot be created or written.
pub fn write_image(frame: &Frame, path: &Path) -> PiResult<()> {
    let file = File::create(path)
        .map_err(|e| PiError::io(format!("Failed to create {}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    write_to(frame, &mut writer)?;
    writer
        .flush()
        .map_err(|e| PiError::io(format!("Flush failed for {}: {e}", path.display())))?;

    Ok(())
}
