//! CLI command handlers.
//!
//! Each handler owns the mapping from outcome to exit code, so the binaries
//! stay one-liners.

use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, error};

use super::args::{ConfigOverrides, DrawArgs, DrawCommand, EstimateArgs, EstimateCommand};
use super::output::{
    print_draw_usage, print_estimate_usage, print_run_summary, print_version,
};
use super::init_tracing;
use crate::animation::{AnimationRun, Assembler, ConvertAssembler};
use crate::config::AnimationConfig;
use crate::engine::{SampleRng, Sampler};
use crate::error::PiResult;

/// Entry point of the estimate tool.
#[must_use]
pub fn run_estimate(args: EstimateArgs) -> ExitCode {
    match args.command {
        EstimateCommand::Estimate { points, seed } => estimate(points, seed),
        EstimateCommand::Help => {
            print_estimate_usage(&args.program);
            ExitCode::SUCCESS
        }
        EstimateCommand::Version => {
            print_version("approximate_pi");
            ExitCode::SUCCESS
        }
    }
}

/// Print one estimate of π from `points` samples.
#[must_use]
pub fn estimate(points: u64, seed: Option<u64>) -> ExitCode {
    let rng = seed.map_or_else(SampleRng::from_entropy, SampleRng::new);
    let mut sampler = Sampler::with_rng(rng);

    match sampler.estimate(points) {
        Ok(pi) => {
            println!("{pi}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Entry point of the draw tool.
///
/// Usage problems exit with status 1 before anything is computed. Once the
/// frames are written the run counts as a success, even if assembling or
/// cleaning up failed.
#[must_use]
pub fn run_draw(args: PiResult<DrawArgs>) -> ExitCode {
    let args = match args {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        DrawCommand::Draw { config, verbose } => draw(config, verbose),
        DrawCommand::DrawFromFile {
            config_path,
            overrides,
            verbose,
        } => draw_from_file(&config_path, overrides, verbose),
        DrawCommand::Help => {
            print_draw_usage(&args.program);
            ExitCode::FAILURE
        }
        DrawCommand::Version => {
            print_version("draw_pi");
            ExitCode::SUCCESS
        }
    }
}

/// Render a run configured from a YAML file, with command-line overrides.
#[must_use]
pub fn draw_from_file(path: &Path, overrides: ConfigOverrides, verbose: bool) -> ExitCode {
    match AnimationConfig::load(path) {
        Ok(config) => draw(overrides.apply(config), verbose),
        Err(e) => {
            eprintln!("Error: failed to load {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}

/// Render a run and report the outcome.
#[must_use]
pub fn draw(config: AnimationConfig, verbose: bool) -> ExitCode {
    draw_with(config, verbose, &ConvertAssembler::default())
}

/// Render a run, assembling with `assembler`, and report the outcome.
#[must_use]
pub fn draw_with(config: AnimationConfig, verbose: bool, assembler: &dyn Assembler) -> ExitCode {
    init_tracing(verbose);

    let run = match AnimationRun::new(config) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(config = ?run.config(), "configuration accepted");

    match run.run_with(assembler) {
        Ok(summary) => {
            print_run_summary(&summary, verbose);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "run aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
