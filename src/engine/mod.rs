//! Sampling engine.
//!
//! Implements the Monte Carlo side of a run:
//! - Deterministic RNG (PCG, seedable)
//! - Point sampling and the one-shot estimator
//! - The checkpointed event stream that drives frame rendering

pub mod generator;
pub mod rng;
pub mod sampler;

pub use generator::{CheckpointedGenerator, SampleEvent, DECILES};
pub use rng::SampleRng;
pub use sampler::{is_in_circle, Point, Sampler};
