//! Frame compositing.
//!
//! Points are painted into the persistent [`PixelBuffer`] decile by decile;
//! the estimate label is only overlaid on a per-frame copy.

use tracing::debug;

use super::digits::{render_label, BlackPixelSet, LabelArea};
use super::pixel::{PixelBuffer, Rgb};
use crate::engine::{Point, SampleEvent};
use crate::error::{PiError, PiResult};

/// Map a point of [-1, 1]² to (`row`, `col`) in an image of side `size`.
///
/// The y axis is inverted so that positive ordinates land in the upper half.
/// Coordinates on the far edge (`x = 1`, `y = -1`) are clamped onto the last
/// column/row.
#[must_use]
pub fn point_to_pixel(point: Point, size: usize) -> (usize, usize) {
    let half = size as f64 / 2.0;
    let last = size.saturating_sub(1);
    let col = (half * (point.x + 1.0)) as usize;
    let row = (half * (-point.y + 1.0)) as usize;
    (row.min(last), col.min(last))
}

/// Color used for a point with the given classification.
#[must_use]
pub const fn point_color(inside: bool) -> Rgb {
    if inside {
        Rgb::RED
    } else {
        Rgb::GREEN
    }
}

/// Paint one frame's worth of points and return the checkpoint that closes it.
///
/// Exactly `points_per_frame` point events are consumed, then the next event
/// must be a checkpoint.
///
/// # Errors
///
/// Returns [`PiError::EventOrder`] if a checkpoint arrives early, a point
/// arrives where the checkpoint is due, or the stream runs dry.
pub fn apply_frame<I>(buffer: &mut PixelBuffer, events: &mut I, points_per_frame: u64) -> PiResult<f64>
where
    I: Iterator<Item = SampleEvent>,
{
    let size = buffer.size();

    for painted in 0..points_per_frame {
        match events.next() {
            Some(SampleEvent::Point { point, inside }) => {
                let (row, col) = point_to_pixel(point, size);
                buffer.set(row, col, point_color(inside));
            }
            Some(other) => {
                return Err(PiError::event_order(
                    format!("point event {} of {points_per_frame}", painted + 1),
                    other.kind(),
                ))
            }
            None => {
                return Err(PiError::event_order(
                    format!("point event {} of {points_per_frame}", painted + 1),
                    "end of stream",
                ))
            }
        }
    }

    match events.next() {
        Some(SampleEvent::Checkpoint(estimate)) => {
            debug!(points_per_frame, estimate, "frame points applied");
            Ok(estimate)
        }
        Some(other) => Err(PiError::event_order("checkpoint", other.kind())),
        None => Err(PiError::event_order("checkpoint", "end of stream")),
    }
}

/// Label pixels for `text` on an image of side `size`.
///
/// # Errors
///
/// Propagates digit renderer errors.
pub fn label_pixels(text: &str, size: usize) -> PiResult<BlackPixelSet> {
    let area = LabelArea::for_image(size);
    render_label(text, size, area.writing_length, area.margin)
}

/// Read-only composite of the buffer and the label for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: usize,
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Side length in pixels.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Color at (`row`, `col`).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        (row < self.size && col < self.size).then(|| self.pixels[row * self.size + col])
    }
}

/// Overlay `label` on a copy of `buffer`.
///
/// Only pixels inside the reserved label rectangle can turn black; the
/// buffer itself is left untouched.
#[must_use]
pub fn render_frame(buffer: &PixelBuffer, label: &BlackPixelSet) -> Frame {
    let size = buffer.size();
    let area = LabelArea::for_image(size);
    let mut pixels = buffer.pixels().to_vec();

    for &(row, col) in label {
        if row < size && col < size && area.contains(size, row, col) {
            pixels[row * size + col] = Rgb::BLACK;
        }
    }

    Frame { size, pixels }
}
