//! # montecarlo-pi
//!
//! Monte Carlo estimation of π, rendered as an animation.
//!
//! Uniform points are drawn in `[-1, 1]²`; the share that lands inside the
//! unit circle approximates `π / 4`. An animated run draws the points onto a
//! square image in ten equal batches, labels every batch with the running
//! estimate in seven-segment digits, and writes each as a binary PPM frame.
//!
//! ## Example
//!
//! ```rust
//! use montecarlo_pi::prelude::*;
//!
//! let mut sampler = Sampler::new(42);
//! let pi = sampler.estimate(10_000).unwrap_or_default();
//! assert!((2.9..3.4).contains(&pi));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod animation;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::animation::{AnimationRun, Assembler, ConvertAssembler, RunSummary};
    pub use crate::config::{AnimationConfig, AnimationConfigBuilder};
    pub use crate::engine::{CheckpointedGenerator, Point, SampleEvent, SampleRng, Sampler};
    pub use crate::error::{PiError, PiResult};
    pub use crate::render::{encode, render_frame, render_label, write_image, PixelBuffer};
}

/// Re-export for public API
pub use error::{PiError, PiResult};
