//! Animated run driver.
//!
//! One run = one generator, one persistent pixel buffer, ten frames, and an
//! optional assembly step:
//!
//! ```text
//! for frame in 0..10:
//!     apply_frame  -> checkpoint estimate
//!     render label -> overlay -> write imgNN_U-DDD.ppm
//! written frames -> convert -> delete them     (failures are reported)
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use super::assembler::{cleanup_frames, Assembler, ConvertAssembler, FRAME_EXTENSION, FRAME_PREFIX};
use crate::config::AnimationConfig;
use crate::engine::{CheckpointedGenerator, SampleRng, Sampler, DECILES};
use crate::error::PiResult;
use crate::render::{apply_frame, label_pixels, render_frame, write_image, PixelBuffer};

/// Format `estimate` with `precision` decimals.
#[must_use]
pub fn format_estimate(estimate: f64, precision: usize) -> String {
    format!("{estimate:.precision$}")
}

/// File name of frame `index` labelled `label`.
///
/// The index is zero-padded so that sorting by name follows emission order.
#[must_use]
pub fn frame_file_name(index: u64, label: &str) -> String {
    let (units, decimals) = label.split_once('.').unwrap_or((label, ""));
    format!("{FRAME_PREFIX}{index:02}_{units}-{decimals}.{FRAME_EXTENSION}")
}

/// One written frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Position in the animation.
    pub index: u64,
    /// Checkpoint estimate shown on the frame.
    pub estimate: f64,
    /// Label text as drawn.
    pub label: String,
    /// Where the frame was written.
    pub path: PathBuf,
}

/// Outcome of the assembly step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProcess {
    /// The animation file, if it was produced.
    pub animation: Option<PathBuf>,
    /// Whether the frame files were deleted.
    pub frames_removed: bool,
    /// Error that interrupted the step, if any.
    pub error: Option<String>,
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Seed the run used; pass it back to reproduce the run.
    pub seed: u64,
    /// Frames in emission order.
    pub frames: Vec<FrameRecord>,
    /// Assembly outcome, `None` when assembly was disabled.
    pub post_process: Option<PostProcess>,
}

impl RunSummary {
    /// Estimate of the last frame.
    #[must_use]
    pub fn final_estimate(&self) -> Option<f64> {
        self.frames.last().map(|f| f.estimate)
    }
}

/// Drives a configured animated run.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    config: AnimationConfig,
}

impl AnimationRun {
    /// Validate `config` and prepare a run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PiError::DomainValidation`] if the configuration is
    /// out of range; nothing has been computed or written at that point.
    pub fn new(config: AnimationConfig) -> PiResult<Self> {
        config.check()?;
        Ok(Self { config })
    }

    /// The run's configuration.
    #[must_use]
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Run with ImageMagick's `convert` as assembler.
    ///
    /// # Errors
    ///
    /// See [`AnimationRun::run_with`].
    pub fn run(&self) -> PiResult<RunSummary> {
        self.run_with(&ConvertAssembler::default())
    }

    /// Render all frames, then assemble them with `assembler`.
    ///
    /// # Errors
    ///
    /// Returns error if sampling, rendering or writing a frame fails.
    /// Assembly and cleanup failures are not errors: they are recorded in
    /// [`RunSummary::post_process`]. Only the frames of this run are handed
    /// to `assembler` and deleted; other files in the output directory are
    /// left alone.
    pub fn run_with(&self, assembler: &dyn Assembler) -> PiResult<RunSummary> {
        let (seed, frames) = self.render_frames()?;
        let post_process = self
            .config
            .assemble
            .then(|| self.post_process(&frames, assembler));

        Ok(RunSummary {
            seed,
            frames,
            post_process,
        })
    }

    fn render_frames(&self) -> PiResult<(u64, Vec<FrameRecord>)> {
        let size = self.config.image_size;
        let rng = self
            .config
            .seed
            .map_or_else(SampleRng::from_entropy, SampleRng::new);
        let seed = rng.seed();
        let mut events = CheckpointedGenerator::new(Sampler::with_rng(rng), self.config.points)?;
        let per_frame = events.points_per_decile();
        let mut buffer = PixelBuffer::new(size);

        info!(
            seed,
            size,
            points = self.config.points,
            precision = self.config.precision,
            "starting animated run"
        );

        let mut records = Vec::with_capacity(DECILES as usize);
        for index in 0..DECILES {
            let estimate = apply_frame(&mut buffer, &mut events, per_frame)?;
            let label = format_estimate(estimate, self.config.precision);
            let path = self.config.output_dir.join(frame_file_name(index, &label));

            let frame = render_frame(&buffer, &label_pixels(&label, size)?);
            write_image(&frame, &path)?;

            info!(index, estimate, path = %path.display(), "frame written");
            records.push(FrameRecord {
                index,
                estimate,
                label,
                path,
            });
        }

        Ok((seed, records))
    }

    fn post_process(&self, frames: &[FrameRecord], assembler: &dyn Assembler) -> PostProcess {
        let mut outcome = PostProcess::default();
        let output = self.config.animation_path();
        let paths: Vec<PathBuf> = frames.iter().map(|f| f.path.clone()).collect();

        let result = assemble_and_clean(
            &paths,
            &output,
            self.config.frame_delay_cs,
            assembler,
            &mut outcome,
        );
        if let Err(e) = result {
            info!(error = %e, "post-processing failed; frames left in place");
            outcome.error = Some(e.to_string());
        }
        outcome
    }
}

fn assemble_and_clean(
    frames: &[PathBuf],
    output: &Path,
    delay_cs: u32,
    assembler: &dyn Assembler,
    outcome: &mut PostProcess,
) -> PiResult<()> {
    assembler.assemble(frames, output, delay_cs)?;
    outcome.animation = Some(output.to_path_buf());

    cleanup_frames(frames)?;
    outcome.frames_removed = true;
    Ok(())
}
