//! draw_pi - render an animated Monte Carlo estimate of π.
//!
//! Usage: `draw_pi <size> <points> <precision> [OPTIONS]`

use std::process::ExitCode;

use montecarlo_pi::cli::{run_draw, DrawArgs};

fn main() -> ExitCode {
    run_draw(DrawArgs::parse())
}
