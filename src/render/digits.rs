//! Seven-segment label rendering.
//!
//! Turns a numeric label such as `"3.14"` into the set of pixels that must be
//! painted black. The writing region is cut into one cell per character and
//! each character is drawn as a union of segments:
//!
//! ```text
//!    ── Top ──
//!   │         │
//!  TopLeft  TopRight
//!   │         │
//!    ─ Middle ─
//!   │         │
//! BottomLeft BottomRight
//!   │         │
//!    ─ Bottom ─   ▪ Dot
//! ```
//!
//! Stroke thickness and spacing scale with the image size.

use std::collections::HashSet;

use crate::error::{PiError, PiResult};

/// Pixels (`row`, `col`) to paint black for a label.
pub type BlackPixelSet = HashSet<(usize, usize)>;

/// Side length of the square stamped for a decimal point.
const DOT_SIZE: usize = 3;

/// Stroke thickness for an image of side `size`.
#[must_use]
pub const fn stroke_thickness(size: usize) -> usize {
    size / 500 + 1
}

/// Gap between two character cells for an image of side `size`.
#[must_use]
pub const fn digit_spacing(size: usize) -> usize {
    size / 100
}

/// Reserved rectangle the label is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelArea {
    /// Horizontal extent of the writing region.
    pub writing_length: usize,
    /// Distance from the top and left image edges to the region.
    pub margin: usize,
}

impl LabelArea {
    /// Label area used for frames of side `size`.
    #[must_use]
    pub fn for_image(size: usize) -> Self {
        Self {
            writing_length: size / 5,
            margin: (size as f64 / 2.25) as usize,
        }
    }

    /// Whether (`row`, `col`) lies in the rectangle of an image of side `size`.
    ///
    /// Both bounds are inclusive.
    #[must_use]
    pub const fn contains(&self, size: usize, row: usize, col: usize) -> bool {
        row >= self.margin
            && row + self.margin <= size
            && col >= self.margin
            && col <= self.margin + self.writing_length
    }
}

/// Rectangle assigned to one character of the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    /// Column of the top-left corner.
    pub left: usize,
    /// Row of the top-left corner.
    pub top: usize,
    /// Cell width.
    pub width: usize,
    /// Cell height.
    pub height: usize,
}

impl GlyphCell {
    const fn half_height(&self) -> usize {
        self.height / 2
    }

    const fn right(&self) -> usize {
        self.left + self.width
    }

    const fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Stroke of a seven-segment glyph, plus the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Horizontal bar along the top edge.
    Top,
    /// Left vertical bar of the upper half.
    TopLeft,
    /// Right vertical bar of the upper half.
    TopRight,
    /// Horizontal bar at mid-height.
    Middle,
    /// Left vertical bar of the lower half.
    BottomLeft,
    /// Right vertical bar of the lower half.
    BottomRight,
    /// Horizontal bar along the bottom edge.
    Bottom,
    /// Small square in the bottom-left corner.
    Dot,
}

impl Segment {
    /// Add the pixels covered by this segment in `cell` to `pixels`.
    ///
    /// Each stroke is a band `thickness` pixels wide growing inward from the
    /// cell edge it is attached to.
    pub fn paint(self, cell: &GlyphCell, thickness: usize, pixels: &mut BlackPixelSet) {
        let half = cell.half_height();
        for k in 0..thickness {
            match self {
                Self::Top => horizontal(pixels, cell.top + k, cell),
                Self::Middle => horizontal(pixels, cell.top + half + k, cell),
                Self::Bottom => horizontal(pixels, cell.bottom() - k, cell),
                Self::TopLeft => vertical(pixels, cell.top, half, cell.left + k),
                Self::TopRight => vertical(pixels, cell.top, half, cell.right() - k),
                Self::BottomLeft => vertical(pixels, cell.top + half, half, cell.left + k),
                Self::BottomRight => {
                    vertical(pixels, cell.top + half, half, cell.right() - k);
                }
                Self::Dot => {
                    for i in 0..DOT_SIZE {
                        for j in 0..DOT_SIZE {
                            pixels.insert((cell.bottom() - j - k, cell.left + i + k));
                        }
                    }
                }
            }
        }
    }
}

fn horizontal(pixels: &mut BlackPixelSet, row: usize, cell: &GlyphCell) {
    pixels.extend((cell.left..cell.right()).map(|col| (row, col)));
}

fn vertical(pixels: &mut BlackPixelSet, top: usize, len: usize, col: usize) {
    pixels.extend((top..top + len).map(|row| (row, col)));
}

/// Segments making up `ch`.
///
/// # Errors
///
/// Returns [`PiError::InvalidCharacter`] for anything but `0`-`9` and `.`.
pub fn glyph(ch: char) -> PiResult<&'static [Segment]> {
    use Segment::{Bottom, BottomLeft, BottomRight, Dot, Middle, Top, TopLeft, TopRight};

    let segments: &'static [Segment] = match ch {
        '0' => &[Top, TopLeft, TopRight, BottomLeft, BottomRight, Bottom],
        '1' => &[TopRight, BottomRight],
        '2' => &[Top, TopRight, Middle, BottomLeft, Bottom],
        '3' => &[Top, TopRight, Middle, BottomRight, Bottom],
        '4' => &[TopLeft, TopRight, Middle, BottomRight],
        '5' => &[Top, TopLeft, Middle, BottomRight, Bottom],
        '6' => &[Top, TopLeft, Middle, BottomLeft, BottomRight, Bottom],
        '7' => &[Top, TopRight, BottomRight],
        '8' => &[Top, TopLeft, TopRight, Middle, BottomLeft, BottomRight, Bottom],
        '9' => &[Top, TopLeft, TopRight, Middle, BottomRight, Bottom],
        '.' => &[Dot],
        other => return Err(PiError::InvalidCharacter(other)),
    };
    Ok(segments)
}

/// Cells for a label of `count` characters.
///
/// # Errors
///
/// Returns [`PiError::InvalidArgument`] if the label is empty, the margin
/// leaves no height, or the characters do not fit in `writing_length`.
pub fn layout_cells(
    count: usize,
    size: usize,
    writing_length: usize,
    margin: usize,
) -> PiResult<Vec<GlyphCell>> {
    if count == 0 {
        return Err(PiError::invalid_argument("cannot render an empty label"));
    }
    if margin * 2 >= size {
        return Err(PiError::invalid_argument(format!(
            "margin {margin} leaves no room in a {size}px image"
        )));
    }

    let spacing = digit_spacing(size);
    let gaps = spacing * (count - 1);
    let width = writing_length.saturating_sub(gaps) / count;
    if width == 0 {
        return Err(PiError::invalid_argument(format!(
            "{count} characters do not fit in {writing_length}px"
        )));
    }

    let height = size - margin * 2;
    Ok((0..count)
        .map(|i| GlyphCell {
            left: margin + (width + spacing) * i,
            top: margin,
            width,
            height,
        })
        .collect())
}

/// Pixels to blacken so that `label` reads in the writing region.
///
/// # Errors
///
/// Returns [`PiError::InvalidCharacter`] for unsupported symbols and
/// [`PiError::InvalidArgument`] when the label cannot be laid out.
pub fn render_label(
    label: &str,
    size: usize,
    writing_length: usize,
    margin: usize,
) -> PiResult<BlackPixelSet> {
    let chars: Vec<char> = label.chars().collect();
    let cells = layout_cells(chars.len(), size, writing_length, margin)?;
    let thickness = stroke_thickness(size);

    let mut pixels = BlackPixelSet::new();
    for (ch, cell) in chars.into_iter().zip(&cells) {
        for segment in glyph(ch)? {
            segment.paint(cell, thickness, &mut pixels);
        }
    }
    Ok(pixels)
}
