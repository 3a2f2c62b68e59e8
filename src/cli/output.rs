//! CLI output formatting.
//!
//! Line-producing helpers return strings so tests can inspect them; the
//! `print_*` wrappers write them to stdout.

use crate::animation::{PostProcess, RunSummary};

/// Print version information.
pub fn print_version(tool: &str) {
    println!("{}", version_line(tool));
}

/// Version line, with the git hash when the build captured one.
#[must_use]
pub fn version_line(tool: &str) -> String {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            let short = hash.get(..8).unwrap_or(hash);
            format!("{tool} {} ({short})", env!("CARGO_PKG_VERSION"))
        }
        _ => format!("{tool} {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print usage of the estimate tool.
pub fn print_estimate_usage(program: &str) {
    println!(
        r"Usage: {program} <points> [--seed <N>]

Estimate pi by drawing <points> uniform samples in [-1, 1]^2 and counting
those that land inside the unit circle.

ARGUMENTS:
    <points>        Number of samples, a positive integer

OPTIONS:
    --seed <N>      Fixed RNG seed for a reproducible estimate
    -h, --help      Show this help message
    -V, --version   Show version information

EXAMPLE:
    {program} 1000000"
    );
}

/// Print usage of the draw tool.
pub fn print_draw_usage(program: &str) {
    println!(
        r"Usage: {program} <size> <points> <precision> [OPTIONS]
       {program} --config <run.yaml> [OPTIONS]

Render ten PPM frames of a Monte Carlo run, each labelled with the running
estimate of pi, and assemble them into an animated GIF.

ARGUMENTS:
    <size>          Side of each square frame in pixels, at least 100
    <points>        Total number of samples, at least 100
    <precision>     Decimals shown in the label, between 1 and 5

OPTIONS:
    --seed <N>      Fixed RNG seed for a reproducible run
    --out <DIR>     Directory receiving frames and animation (default: .)
    --no-assemble   Keep the frames and skip the `convert` step
    --config <FILE> Load the run configuration from a YAML file
    -v, --verbose   Log progress to stderr
    -h, --help      Show this help message
    -V, --version   Show version information

EXAMPLE:
    {program} 500 100000 3"
    );
}

/// Print the frames of a finished run.
pub fn print_run_summary(summary: &RunSummary, verbose: bool) {
    if verbose {
        println!("Seed: {}", summary.seed);
        for frame in &summary.frames {
            println!("  frame {:>2}: {} -> {}", frame.index, frame.label, frame.path.display());
        }
    }
    if let Some(post) = &summary.post_process {
        for line in post_process_lines(post) {
            println!("{line}");
        }
    }
}

/// Status lines for the assembly step, in the order the steps ran.
#[must_use]
pub fn post_process_lines(post: &PostProcess) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(animation) = &post.animation {
        let name = animation
            .file_name()
            .map_or_else(|| animation.display().to_string(), |n| n.to_string_lossy().into_owned());
        lines.push(format!("GIF '{name}' created successfully."));
    }
    if post.frames_removed {
        lines.push("Temporary .ppm files removed.".to_string());
    }
    if let Some(error) = &post.error {
        lines.push(format!("An error occurred: {error}"));
    }
    lines
}
