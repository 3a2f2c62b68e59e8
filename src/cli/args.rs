//! CLI argument parsing.
//!
//! Both tools parse from any iterator of strings, not just
//! `std::env::args()`, so every path through the parser is testable.

use std::path::PathBuf;

use crate::config::AnimationConfig;
use crate::error::{PiError, PiResult};

/// Arguments of the `approximate_pi` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateArgs {
    /// Name the tool was invoked as.
    pub program: String,
    /// The command to execute.
    pub command: EstimateCommand,
}

/// Commands of the `approximate_pi` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateCommand {
    /// Estimate π from `points` samples.
    Estimate {
        /// Number of samples.
        points: u64,
        /// Optional fixed seed.
        seed: Option<u64>,
    },
    /// Show usage.
    Help,
    /// Show version.
    Version,
}

impl EstimateArgs {
    /// Parse command-line arguments from an iterator.
    ///
    /// Anything that is not exactly one positive integer (plus an optional
    /// `--seed <N>`) yields [`EstimateCommand::Help`].
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        let program = program_name(&args, "approximate_pi");
        let command = Self::parse_command(args.get(1..).unwrap_or_default());
        Self { program, command }
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_command(args: &[String]) -> EstimateCommand {
        match args {
            [flag] if is_help(flag) => EstimateCommand::Help,
            [flag] if is_version(flag) => EstimateCommand::Version,
            [points] => parse_points(points, None),
            [points, flag, seed] | [flag, seed, points] if flag == "--seed" => {
                match seed.parse() {
                    Ok(seed) => parse_points(points, Some(seed)),
                    Err(_) => EstimateCommand::Help,
                }
            }
            _ => EstimateCommand::Help,
        }
    }
}

fn parse_points(raw: &str, seed: Option<u64>) -> EstimateCommand {
    match raw.parse::<u64>() {
        Ok(points) if points > 0 => EstimateCommand::Estimate { points, seed },
        _ => EstimateCommand::Help,
    }
}

/// Arguments of the `draw_pi` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawArgs {
    /// Name the tool was invoked as.
    pub program: String,
    /// The command to execute.
    pub command: DrawCommand,
}

/// Commands of the `draw_pi` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Render an animated run described on the command line.
    Draw {
        /// Run configuration, not yet range-checked.
        config: AnimationConfig,
        /// Enable verbose output.
        verbose: bool,
    },
    /// Render an animated run described by a YAML file.
    DrawFromFile {
        /// Path to the configuration file.
        config_path: PathBuf,
        /// Command-line options that replace values from the file.
        overrides: ConfigOverrides,
        /// Enable verbose output.
        verbose: bool,
    },
    /// Show usage.
    Help,
    /// Show version.
    Version,
}

/// `--seed`, `--out` and `--no-assemble`, applied on top of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces the seed.
    pub seed: Option<u64>,
    /// Replaces the output directory.
    pub output_dir: Option<PathBuf>,
    /// Disables assembly when set.
    pub no_assemble: bool,
}

impl ConfigOverrides {
    /// Apply the overrides that were given to `config`.
    #[must_use]
    pub fn apply(self, mut config: AnimationConfig) -> AnimationConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if self.no_assemble {
            config.assemble = false;
        }
        config
    }
}

#[derive(Debug, Default)]
struct DrawOptions {
    positionals: Vec<String>,
    overrides: ConfigOverrides,
    config_path: Option<PathBuf>,
    verbose: bool,
    help: bool,
    version: bool,
}

impl DrawArgs {
    /// Parse command-line arguments from an iterator.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidArgument`] if a positional argument or an
    /// option value is not an integer, or an option is unknown. Range checks
    /// are left to [`AnimationConfig::check`].
    pub fn parse_from<I, S>(args: I) -> PiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        let program = program_name(&args, "draw_pi");
        let command = Self::parse_command(args.get(1..).unwrap_or_default())?;
        Ok(Self { program, command })
    }

    /// Parse command-line arguments from the environment.
    ///
    /// # Errors
    ///
    /// See [`DrawArgs::parse_from`].
    pub fn parse() -> PiResult<Self> {
        Self::parse_from(std::env::args())
    }

    fn parse_command(args: &[String]) -> PiResult<DrawCommand> {
        let options = Self::parse_options(args)?;

        if options.help {
            return Ok(DrawCommand::Help);
        }
        if options.version {
            return Ok(DrawCommand::Version);
        }

        if let Some(config_path) = options.config_path {
            if !options.positionals.is_empty() {
                return Ok(DrawCommand::Help);
            }
            return Ok(DrawCommand::DrawFromFile {
                config_path,
                overrides: options.overrides,
                verbose: options.verbose,
            });
        }

        let [size, points, precision] = options.positionals.as_slice() else {
            return Ok(DrawCommand::Help);
        };

        let config = AnimationConfig::builder()
            .image_size(parse_integer("image size", size)?)
            .points(parse_integer("point count", points)?)
            .precision(parse_integer("precision", precision)?)
            .build();

        Ok(DrawCommand::Draw {
            config: options.overrides.apply(config),
            verbose: options.verbose,
        })
    }

    fn parse_options(args: &[String]) -> PiResult<DrawOptions> {
        let mut options = DrawOptions::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "-h" | "--help" => options.help = true,
                "-V" | "--version" => options.version = true,
                "-v" | "--verbose" => options.verbose = true,
                "--no-assemble" => options.overrides.no_assemble = true,
                "--seed" => {
                    let value = option_value(args, i, arg)?;
                    options.overrides.seed = Some(parse_integer("seed", value)?);
                    i += 1;
                }
                "--out" => {
                    options.overrides.output_dir =
                        Some(PathBuf::from(option_value(args, i, arg)?));
                    i += 1;
                }
                "--config" => {
                    options.config_path = Some(PathBuf::from(option_value(args, i, arg)?));
                    i += 1;
                }
                flag if flag.starts_with('-') && !looks_numeric(flag) => {
                    return Err(PiError::invalid_argument(format!("unknown option '{flag}'")));
                }
                positional => options.positionals.push(positional.to_string()),
            }
            i += 1;
        }
        Ok(options)
    }
}

fn program_name(args: &[String], fallback: &str) -> String {
    args.first().cloned().unwrap_or_else(|| fallback.to_string())
}

fn is_help(arg: &str) -> bool {
    matches!(arg, "-h" | "--help" | "help")
}

fn is_version(arg: &str) -> bool {
    matches!(arg, "-V" | "--version" | "version")
}

fn looks_numeric(arg: &str) -> bool {
    arg.parse::<f64>().is_ok()
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> PiResult<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| PiError::invalid_argument(format!("option '{flag}' requires a value")))
}

/// Parse `raw` as an integer of type `T`.
///
/// Negative values parse as integers but are rejected as out of range.
fn parse_integer<T>(name: &str, raw: &str) -> PiResult<T>
where
    T: TryFrom<i128>,
{
    let value: i128 = raw.trim().parse().map_err(|_| {
        PiError::invalid_argument(format!("{name} must be an integer, got '{raw}'"))
    })?;
    T::try_from(value)
        .map_err(|_| PiError::domain(format!("{name} must be a positive integer, got {value}")))
}
