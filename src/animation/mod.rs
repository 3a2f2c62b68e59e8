//! Animated rendering of a sampling run.
//!
//! [`run`] writes the ten frames; [`assembler`] hands them to an external
//! tool and removes them afterwards.

pub mod assembler;
pub mod run;

pub use assembler::{cleanup_frames, Assembler, ConvertAssembler};
pub use run::{
    format_estimate, frame_file_name, AnimationRun, FrameRecord, PostProcess, RunSummary,
};
