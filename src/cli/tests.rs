//! CLI module tests.

#![allow(clippy::unwrap_used, clippy::panic)]

use super::args::{ConfigOverrides, DrawArgs, DrawCommand, EstimateArgs, EstimateCommand};
use super::commands::{draw_from_file, draw_with, run_draw, run_estimate};
use super::output::{post_process_lines, version_line};
use crate::animation::{ConvertAssembler, PostProcess};
use crate::config::AnimationConfig;
use crate::error::PiError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// ============================================================================
// approximate_pi parsing
// ============================================================================

#[test]
fn test_estimate_no_args_shows_help() {
    let args = EstimateArgs::parse_from(["approximate_pi"]);
    assert_eq!(args.command, EstimateCommand::Help);
    assert_eq!(args.program, "approximate_pi");
}

#[test]
fn test_estimate_empty_iterator_uses_fallback_name() {
    let args = EstimateArgs::parse_from(Vec::<String>::new());
    assert_eq!(args.program, "approximate_pi");
    assert_eq!(args.command, EstimateCommand::Help);
}

#[test]
fn test_estimate_help_flags() {
    for flag in ["-h", "--help", "help"] {
        let args = EstimateArgs::parse_from(["approximate_pi", flag]);
        assert_eq!(args.command, EstimateCommand::Help, "flag {flag}");
    }
}

#[test]
fn test_estimate_version_flags() {
    for flag in ["-V", "--version", "version"] {
        let args = EstimateArgs::parse_from(["approximate_pi", flag]);
        assert_eq!(args.command, EstimateCommand::Version, "flag {flag}");
    }
}

#[test]
fn test_estimate_points() {
    let args = EstimateArgs::parse_from(["approximate_pi", "1000"]);
    assert_eq!(
        args.command,
        EstimateCommand::Estimate {
            points: 1000,
            seed: None
        }
    );
}

#[test]
fn test_estimate_points_with_seed_either_order() {
    let expected = EstimateCommand::Estimate {
        points: 500,
        seed: Some(42),
    };
    let after = EstimateArgs::parse_from(["approximate_pi", "500", "--seed", "42"]);
    let before = EstimateArgs::parse_from(["approximate_pi", "--seed", "42", "500"]);

    assert_eq!(after.command, expected);
    assert_eq!(before.command, expected);
}

#[test]
fn test_estimate_malformed_shows_help() {
    let cases: &[&[&str]] = &[
        &["approximate_pi", "abc"],
        &["approximate_pi", "0"],
        &["approximate_pi", "-5"],
        &["approximate_pi", "2.5"],
        &["approximate_pi", "10", "20"],
        &["approximate_pi", "10", "--seed"],
        &["approximate_pi", "10", "--seed", "x"],
        &["approximate_pi", "10", "--rounds", "3"],
    ];
    for case in cases {
        let args = EstimateArgs::parse_from(case.iter());
        assert_eq!(args.command, EstimateCommand::Help, "args {case:?}");
    }
}

// ============================================================================
// draw_pi parsing
// ============================================================================

fn draw(args: &[&str]) -> Result<DrawCommand, PiError> {
    let mut full = vec!["draw_pi"];
    full.extend_from_slice(args);
    DrawArgs::parse_from(full).map(|a| a.command)
}

#[test]
fn test_draw_no_args_shows_help() {
    assert_eq!(draw(&[]).unwrap(), DrawCommand::Help);
}

#[test]
fn test_draw_wrong_positional_count_shows_help() {
    assert_eq!(draw(&["200", "1000"]).unwrap(), DrawCommand::Help);
    assert_eq!(draw(&["200", "1000", "2", "4"]).unwrap(), DrawCommand::Help);
}

#[test]
fn test_draw_help_wins_over_positionals() {
    assert_eq!(draw(&["200", "1000", "2", "--help"]).unwrap(), DrawCommand::Help);
    assert_eq!(draw(&["-h"]).unwrap(), DrawCommand::Help);
}

#[test]
fn test_draw_version() {
    assert_eq!(draw(&["-V"]).unwrap(), DrawCommand::Version);
    assert_eq!(draw(&["--version"]).unwrap(), DrawCommand::Version);
}

#[test]
fn test_draw_positionals() {
    let DrawCommand::Draw { config, verbose } = draw(&["200", "1000", "2"]).unwrap() else {
        panic!("expected a draw command");
    };

    assert!(!verbose);
    assert_eq!(config.image_size, 200);
    assert_eq!(config.points, 1000);
    assert_eq!(config.precision, 2);
    assert_eq!(config.seed, None);
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert!(config.assemble);
}

#[test]
fn test_draw_options() {
    let command = draw(&[
        "--seed",
        "7",
        "300",
        "--out",
        "/tmp/frames",
        "5000",
        "3",
        "--no-assemble",
        "-v",
    ])
    .unwrap();
    let DrawCommand::Draw { config, verbose } = command else {
        panic!("expected a draw command");
    };

    assert!(verbose);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/frames"));
    assert_eq!(config.image_size, 300);
    assert!(!config.assemble);
}

#[test]
fn test_draw_config_file() {
    let command = draw(&["--config", "run.yaml", "--verbose"]).unwrap();
    assert_eq!(
        command,
        DrawCommand::DrawFromFile {
            config_path: PathBuf::from("run.yaml"),
            overrides: ConfigOverrides::default(),
            verbose: true
        }
    );
}

#[test]
fn test_draw_config_file_keeps_overrides() {
    let command = draw(&[
        "--config",
        "run.yaml",
        "--seed",
        "5",
        "--out",
        "/tmp/x",
        "--no-assemble",
    ])
    .unwrap();

    assert_eq!(
        command,
        DrawCommand::DrawFromFile {
            config_path: PathBuf::from("run.yaml"),
            overrides: ConfigOverrides {
                seed: Some(5),
                output_dir: Some(PathBuf::from("/tmp/x")),
                no_assemble: true,
            },
            verbose: false
        }
    );
}

#[test]
fn test_overrides_replace_file_values() {
    let loaded = AnimationConfig::from_yaml(
        "image_size: 150\npoints: 200\nprecision: 1\nseed: 9\noutput_dir: frames\n",
    )
    .unwrap();
    let overrides = ConfigOverrides {
        seed: Some(5),
        output_dir: Some(PathBuf::from("/tmp/x")),
        no_assemble: true,
    };

    let config = overrides.apply(loaded);

    assert_eq!(config.seed, Some(5));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/x"));
    assert!(!config.assemble);
    assert_eq!(config.image_size, 150);
}

#[test]
fn test_empty_overrides_keep_file_values() {
    let loaded = AnimationConfig::from_yaml(
        "image_size: 150\npoints: 200\nprecision: 1\nseed: 9\nassemble: true\n",
    )
    .unwrap();

    let config = ConfigOverrides::default().apply(loaded.clone());

    assert_eq!(config, loaded);
}

#[test]
fn test_draw_config_file_with_positionals_shows_help() {
    assert_eq!(
        draw(&["--config", "run.yaml", "200", "1000", "2"]).unwrap(),
        DrawCommand::Help
    );
}

#[test]
fn test_draw_non_integer_rejected() {
    for args in [["abc", "1000", "2"], ["200", "1e3", "2"], ["200", "1000", "2.5"]] {
        let err = draw(&args).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument(_)), "args {args:?}");
    }
}

#[test]
fn test_draw_negative_is_range_error() {
    let err = draw(&["-200", "1000", "2"]).unwrap_err();
    assert!(matches!(err, PiError::DomainValidation(_)));
    assert!(err.to_string().contains("image size"));
}

#[test]
fn test_draw_range_left_to_config_check() {
    let DrawCommand::Draw { config, .. } = draw(&["50", "1000", "2"]).unwrap() else {
        panic!("expected a draw command");
    };
    assert!(matches!(config.check(), Err(PiError::DomainValidation(_))));
}

#[test]
fn test_draw_unknown_option() {
    let err = draw(&["200", "1000", "2", "--colour"]).unwrap_err();
    assert!(matches!(err, PiError::InvalidArgument(_)));
    assert!(err.to_string().contains("--colour"));
}

#[test]
fn test_draw_option_missing_value() {
    for flag in ["--seed", "--out", "--config"] {
        let err = draw(&["200", "1000", "2", flag]).unwrap_err();
        assert!(err.to_string().contains("requires a value"), "flag {flag}");
    }
}

#[test]
fn test_draw_bad_seed() {
    assert!(matches!(
        draw(&["--seed", "x", "200", "1000", "2"]),
        Err(PiError::InvalidArgument(_))
    ));
    assert!(matches!(
        draw(&["--seed", "-1", "200", "1000", "2"]),
        Err(PiError::DomainValidation(_))
    ));
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_version_line() {
    let line = version_line("draw_pi");
    assert!(line.starts_with("draw_pi "));
    assert!(line.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_post_process_lines_success() {
    let post = PostProcess {
        animation: Some(PathBuf::from("/tmp/out/image.gif")),
        frames_removed: true,
        error: None,
    };
    assert_eq!(
        post_process_lines(&post),
        ["GIF 'image.gif' created successfully.", "Temporary .ppm files removed."]
    );
}

#[test]
fn test_post_process_lines_failure() {
    let post = PostProcess {
        animation: None,
        frames_removed: false,
        error: Some("I/O error: Failed to run 'convert'".to_string()),
    };
    assert_eq!(
        post_process_lines(&post),
        ["An error occurred: I/O error: Failed to run 'convert'"]
    );
}

#[test]
fn test_post_process_lines_cleanup_failure() {
    let post = PostProcess {
        animation: Some(PathBuf::from("image.gif")),
        frames_removed: false,
        error: Some("disk".to_string()),
    };
    let lines = post_process_lines(&post);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("created successfully"));
    assert!(lines[1].starts_with("An error occurred"));
}

// ============================================================================
// Exit codes
// ============================================================================

fn small_run(dir: &Path, assemble: bool) -> AnimationConfig {
    AnimationConfig::builder()
        .image_size(100)
        .points(100)
        .precision(1)
        .seed(3)
        .output_dir(dir)
        .assemble(assemble)
        .build()
}

fn ppm_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|e| e == "ppm")
        })
        .count()
}

#[test]
fn test_run_estimate_help_succeeds() {
    let exit = run_estimate(EstimateArgs::parse_from(["approximate_pi", "abc"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_estimate_version_succeeds() {
    let exit = run_estimate(EstimateArgs::parse_from(["approximate_pi", "--version"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_estimate_succeeds() {
    let exit = run_estimate(EstimateArgs::parse_from(["approximate_pi", "1000", "--seed", "1"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_draw_parse_error_fails() {
    let exit = run_draw(DrawArgs::parse_from(["draw_pi", "abc", "1000", "2"]));
    assert_eq!(exit, ExitCode::FAILURE);

    let exit = run_draw(Err(PiError::invalid_argument("unknown option '--colour'")));
    assert_eq!(exit, ExitCode::FAILURE);
}

#[test]
fn test_run_draw_help_fails() {
    let exit = run_draw(DrawArgs::parse_from(["draw_pi"]));
    assert_eq!(exit, ExitCode::FAILURE);
}

#[test]
fn test_run_draw_version_succeeds() {
    let exit = run_draw(DrawArgs::parse_from(["draw_pi", "-V"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_out_of_range_config_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_run(dir.path(), false);
    config.image_size = 50;

    let exit = draw_with(config, false, &ConvertAssembler::default());

    assert_eq!(exit, ExitCode::FAILURE);
    assert_eq!(ppm_count(dir.path()), 0);
}

#[test]
fn test_missing_assembler_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let assembler = ConvertAssembler::new("definitely-not-an-installed-program");

    let exit = draw_with(small_run(dir.path(), true), false, &assembler);

    assert_eq!(exit, ExitCode::SUCCESS);
    assert_eq!(ppm_count(dir.path()), 10);
}

#[test]
fn test_unwritable_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_run(&dir.path().join("missing"), false);

    let exit = draw_with(config, false, &ConvertAssembler::default());
    assert_eq!(exit, ExitCode::FAILURE);
}

#[test]
fn test_draw_from_file_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let yaml_dir = dir.path().join("from-yaml");
    let out_dir = dir.path().join("from-cli");
    std::fs::create_dir(&yaml_dir).unwrap();
    std::fs::create_dir(&out_dir).unwrap();

    let path = dir.path().join("run.yaml");
    std::fs::write(
        &path,
        format!(
            "image_size: 100\npoints: 100\nprecision: 1\nseed: 2\noutput_dir: {}\n",
            yaml_dir.display()
        ),
    )
    .unwrap();
    let overrides = ConfigOverrides {
        seed: None,
        output_dir: Some(out_dir.clone()),
        no_assemble: true,
    };

    let exit = draw_from_file(&path, overrides, false);

    assert_eq!(exit, ExitCode::SUCCESS);
    assert_eq!(ppm_count(&yaml_dir), 0);
    assert_eq!(ppm_count(&out_dir), 10);
}

#[test]
fn test_draw_from_missing_file_fails() {
    let exit = draw_from_file(
        Path::new("/definitely/not/here.yaml"),
        ConfigOverrides::default(),
        false,
    );
    assert_eq!(exit, ExitCode::FAILURE);
}
