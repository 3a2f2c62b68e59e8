//! Frame-sequence to animation conversion.
//!
//! The conversion itself is delegated to an external program; by default
//! ImageMagick's `convert`:
//!
//! ```text
//! convert -delay 100 img00_....ppm img01_....ppm ... image.gif
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{PiError, PiResult};

/// File name prefix shared by all frames.
pub const FRAME_PREFIX: &str = "img";
/// File extension of the frames.
pub const FRAME_EXTENSION: &str = "ppm";

/// Turns an ordered list of frame files into one animation file.
pub trait Assembler {
    /// Assemble `frames`, in the given order, into `output`.
    ///
    /// # Errors
    ///
    /// Returns error if the animation cannot be produced.
    fn assemble(&self, frames: &[PathBuf], output: &Path, delay_cs: u32) -> PiResult<()>;
}

/// [`Assembler`] running ImageMagick's `convert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertAssembler {
    program: String,
}

impl Default for ConvertAssembler {
    fn default() -> Self {
        Self::new("convert")
    }
}

impl ConvertAssembler {
    /// Use `program` in place of `convert`. It receives the same arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program that will be invoked.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, frames: &[PathBuf], output: &Path, delay_cs: u32) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-delay")
            .arg(delay_cs.to_string())
            .args(frames)
            .arg(output);
        command
    }
}

impl Assembler for ConvertAssembler {
    fn assemble(&self, frames: &[PathBuf], output: &Path, delay_cs: u32) -> PiResult<()> {
        if frames.is_empty() {
            return Err(PiError::invalid_argument("no frames to assemble"));
        }

        debug!(program = %self.program, frames = frames.len(), "spawning animation assembler");
        let status = self
            .command(frames, output, delay_cs)
            .status()
            .map_err(|e| PiError::io(format!("Failed to run '{}': {e}", self.program)))?;

        if !status.success() {
            return Err(PiError::io(format!("'{}' exited with {status}", self.program)));
        }

        info!(output = %output.display(), frames = frames.len(), "animation assembled");
        Ok(())
    }
}

/// Delete the given frame files.
///
/// # Errors
///
/// Returns [`PiError::Io`] on the first file that cannot be removed.
pub fn cleanup_frames(frames: &[PathBuf]) -> PiResult<()> {
    for frame in frames {
        std::fs::remove_file(frame)
            .map_err(|e| PiError::io(format!("Failed to remove {}: {e}", frame.display())))?;
    }
    info!(count = frames.len(), "temporary frames removed");
    Ok(())
}
