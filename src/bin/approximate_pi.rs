//! approximate_pi - estimate π by Monte Carlo sampling.
//!
//! Usage: `approximate_pi <points> [--seed <N>]`

use std::process::ExitCode;

use montecarlo_pi::cli::{run_estimate, EstimateArgs};

fn main() -> ExitCode {
    run_estimate(EstimateArgs::parse())
}
