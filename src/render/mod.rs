//! Raster rendering of a sampling run.
//!
//! - [`pixel`]: the persistent binary-color pixel buffer
//! - [`digits`]: seven-segment label rasterization
//! - [`compositor`]: point painting and per-frame label overlay
//! - [`ppm`]: binary PPM encoding

pub mod compositor;
pub mod digits;
pub mod pixel;
pub mod ppm;

pub use compositor::{apply_frame, label_pixels, point_to_pixel, render_frame, Frame};
pub use digits::{render_label, BlackPixelSet, GlyphCell, LabelArea, Segment};
pub use pixel::{PixelBuffer, Rgb};
pub use ppm::{encode, write_image};
