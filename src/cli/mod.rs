//! Command-line front ends.
//!
//! Parsing, dispatch and output live here so the binaries only wire
//! `std::env::args()` to a handler, and every path can be tested.

mod args;
mod commands;
mod output;

pub use args::{ConfigOverrides, DrawArgs, DrawCommand, EstimateArgs, EstimateCommand};
pub use commands::{draw, draw_from_file, draw_with, estimate, run_draw, run_estimate};
pub use output::{
    post_process_lines, print_draw_usage, print_estimate_usage, print_run_summary,
    print_version, version_line,
};

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `info` over `warn`.
/// A second call is a no-op.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests;
