//! Run configuration with YAML loading and validation.
//!
//! Configuration errors are caught before any sampling starts:
//! - Type-safe configuration struct
//! - Range validation via `validator`
//! - Semantic validation for the remaining constraints

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{PiError, PiResult};

/// Delay between two animation frames, in hundredths of a second.
pub const DEFAULT_FRAME_DELAY_CS: u32 = 100;

/// Configuration of one animated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Side of each square frame, in pixels.
    #[validate(range(min = 100, message = "image size must be an integer >= 100"))]
    pub image_size: usize,

    /// Number of points drawn over the whole run.
    #[validate(range(min = 100, message = "point count must be an integer >= 100"))]
    pub points: u64,

    /// Decimals shown in the estimate label.
    #[validate(range(min = 1, max = 5, message = "precision must be between 1 and 5"))]
    pub precision: usize,

    /// RNG seed; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Directory receiving the frames and the animation.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the assembled animation.
    #[validate(length(min = 1, message = "animation name must not be empty"))]
    #[serde(default = "default_animation_name")]
    pub animation_name: String,

    /// Delay between frames in the animation, in hundredths of a second.
    #[validate(range(min = 1, message = "frame delay must be positive"))]
    #[serde(default = "default_frame_delay")]
    pub frame_delay_cs: u32,

    /// Assemble the frames into an animation and delete them afterwards.
    #[serde(default = "default_true")]
    pub assemble: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_animation_name() -> String {
    "image.gif".to_string()
}

const fn default_frame_delay() -> u32 {
    DEFAULT_FRAME_DELAY_CS
}

const fn default_true() -> bool {
    true
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            image_size: 500,
            points: 10_000,
            precision: 3,
            seed: None,
            output_dir: default_output_dir(),
            animation_name: default_animation_name(),
            frame_delay_cs: DEFAULT_FRAME_DELAY_CS,
            assemble: true,
        }
    }
}

impl AnimationConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> PiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> PiResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> AnimationConfigBuilder {
        AnimationConfigBuilder::default()
    }

    /// Validate every constraint.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::DomainValidation`] naming the first violated rule.
    pub fn check(&self) -> PiResult<()> {
        self.validate_ranges()?;
        self.validate_semantic()
    }

    fn validate_ranges(&self) -> PiResult<()> {
        Validate::validate(self).map_err(|errors| {
            let messages: Vec<String> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| {
                        e.message
                            .as_ref()
                            .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
                    })
                })
                .collect();
            PiError::domain(messages.join("; "))
        })
    }

    fn validate_semantic(&self) -> PiResult<()> {
        let file_name = Path::new(&self.animation_name)
            .file_name()
            .and_then(|n| n.to_str());
        if file_name != Some(self.animation_name.as_str()) {
            return Err(PiError::domain(format!(
                "animation name '{}' must be a plain file name",
                self.animation_name
            )));
        }
        Ok(())
    }

    /// Path of the assembled animation.
    #[must_use]
    pub fn animation_path(&self) -> PathBuf {
        self.output_dir.join(&self.animation_name)
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct AnimationConfigBuilder {
    image_size: Option<usize>,
    points: Option<u64>,
    precision: Option<usize>,
    seed: Option<u64>,
    output_dir: Option<PathBuf>,
    assemble: Option<bool>,
}

impl AnimationConfigBuilder {
    /// Set the frame side in pixels.
    #[must_use]
    pub const fn image_size(mut self, size: usize) -> Self {
        self.image_size = Some(size);
        self
    }

    /// Set the total point count.
    #[must_use]
    pub const fn points(mut self, points: u64) -> Self {
        self.points = Some(points);
        self
    }

    /// Set the number of label decimals.
    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Enable or disable animation assembly.
    #[must_use]
    pub const fn assemble(mut self, assemble: bool) -> Self {
        self.assemble = Some(assemble);
        self
    }

    /// Build the configuration. Call [`AnimationConfig::check`] to validate it.
    #[must_use]
    pub fn build(self) -> AnimationConfig {
        let mut config = AnimationConfig::default();

        if let Some(size) = self.image_size {
            config.image_size = size;
        }
        if let Some(points) = self.points {
            config.points = points;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(assemble) = self.assemble {
            config.assemble = assemble;
        }
        config.seed = self.seed;

        config
    }
}
