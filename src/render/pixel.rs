//! Pixel buffer with binary color channels.
//!
//! Channels hold 0 or 1, matching a PPM max value of 1.

/// Largest channel value, written into the PPM header.
pub const MAX_CHANNEL: u8 = 1;

/// RGB triple with components in {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Untouched background.
    pub const WHITE: Self = Self::new(1, 1, 1);
    /// Label ink.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Point inside the unit circle.
    pub const RED: Self = Self::new(1, 0, 0);
    /// Point outside the unit circle.
    pub const GREEN: Self = Self::new(0, 1, 0);

    /// Create a color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in R, G, B order.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Square pixel grid stored row-major.
///
/// One buffer lives for a whole run; frames only ever add colors to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create an all-white `size`×`size` buffer.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            pixels: vec![Rgb::WHITE; size * size],
        }
    }

    /// Side length in pixels.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Color at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        self.index(row, col).map(|i| self.pixels[i])
    }

    /// Set the color at (`row`, `col`). Writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Rgb) {
        if let Some(i) = self.index(row, col) {
            self.pixels[i] = color;
        }
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Number of pixels that are no longer white.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != Rgb::WHITE).count()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}
