//! Tests for the command-line interface of the binary

mod test_helpers;

use hand_gesture_control::config::{Config, EXAMPLE_CONFIG};
use std::process::Command;
use test_helpers::{Finger, HandBuilder};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hand-gesture-control"))
}

#[test]
fn test_print_config() {
    let output = binary().arg("--print-config").output().unwrap();
    assert!(output.status.success());

    let printed = String::from_utf8(output.stdout).unwrap();
    assert_eq!(printed, EXAMPLE_CONFIG);
    assert!(Config::from_yaml(&printed).is_ok());
}

#[test]
fn test_help_lists_options() {
    let output = binary().arg("--help").output().unwrap();
    assert!(output.status.success());

    let help = String::from_utf8(output.stdout).unwrap();
    for flag in ["--input", "--exec", "--config", "--dry-run", "--mirror", "--smoothing", "--debug"] {
        assert!(help.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn test_input_conflicts_with_exec() {
    let output = binary()
        .args(["--input", "stream.jsonl", "--exec", "tracker"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_dry_run_over_recorded_stream() {
    let path = std::env::temp_dir().join(format!("hand_gesture_cli_{}.jsonl", std::process::id()));
    let content = [
        HandBuilder::open().to_json_line(),
        HandBuilder::open().pinch(Finger::Middle, 0.0).to_json_line(),
    ]
    .join("\n");
    std::fs::write(&path, content).unwrap();

    let output = binary()
        .arg("--dry-run")
        .arg("--input")
        .arg(&path)
        .args(["--smoothing", "exponential"])
        .output()
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
}

#[test]
fn test_explicit_input_overrides_configured_command() {
    let id = std::process::id();
    let stream = std::env::temp_dir().join(format!("hand_gesture_cli_override_{id}.jsonl"));
    let config_path = std::env::temp_dir().join(format!("hand_gesture_cli_override_{id}.yaml"));
    std::fs::write(&stream, HandBuilder::open().to_json_line()).unwrap();

    let mut config = Config::default();
    config.source.command = Some("/nonexistent/hand-tracker".to_string());
    config.to_file(&config_path).unwrap();

    let output = binary()
        .env_remove("RUST_LOG")
        .arg("--dry-run")
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(&stream)
        .output()
        .unwrap();
    std::fs::remove_file(&stream).unwrap();
    std::fs::remove_file(&config_path).unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring configured tracker command"));
}

#[test]
fn test_unknown_smoothing_fails() {
    let output = binary()
        .args(["--dry-run", "--input", "/dev/null", "--smoothing", "kalman"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
