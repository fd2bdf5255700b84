//! Exit code integration tests
//!
//! These tests verify that invalid invocations fail before anything touches
//! the filesystem, and that valid ones produce exactly one output file.
//!
//! ## Exit Code Contract
//!
//! | Exit Code | Meaning |
//! |-----------|---------|
//! | 0 | Success: planner file written |
//! | 1 | Generation failure (config invariant, unwritable destination) |
//! | 2 | Usage error: malformed arguments, nothing written |

use std::path::Path;
use std::process::{Command, Output};

fn weekgrid_binary() -> &'static str {
    env!("CARGO_BIN_EXE_weekgrid")
}

/// Run the binary with the given args and an --output inside `dir`.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    let output_path = dir.join("Planner.xlsx");
    Command::new(weekgrid_binary())
        .args(args)
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("failed to execute weekgrid")
}

// =============================================================================
// Success Path
// =============================================================================

#[test]
fn exit_0_writes_planner_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["2024-01-01", "3"]);

    assert_eq!(output.status.code(), Some(0));
    let path = dir.path().join("Planner.xlsx");
    assert!(path.exists(), "planner file should be written on success");

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..2], b"PK", "output should be a zip-based xlsx");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Planner created:"));
}

#[test]
fn exit_0_with_custom_grid_options() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["2024-06-03", "5", "--start-hour", "6", "--end-hour", "21", "--notes", "2"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("Planner.xlsx").exists());
}

// =============================================================================
// Usage Errors (exit 2, zero filesystem writes)
// =============================================================================

#[test]
fn exit_2_unparseable_date() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["January 1st", "3"]);

    assert_eq!(output.status.code(), Some(2), "bad date should be a usage error");
    assert!(!dir.path().join("Planner.xlsx").exists());
}

#[test]
fn exit_2_non_numeric_day_count() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["2024-01-01", "three"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("Planner.xlsx").exists());
}

#[test]
fn exit_2_zero_day_count() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["2024-01-01", "0"]);

    assert_eq!(output.status.code(), Some(2), "day count must be positive");
    assert!(!dir.path().join("Planner.xlsx").exists());
}

#[test]
fn exit_2_missing_arguments() {
    let output = Command::new(weekgrid_binary())
        .output()
        .expect("failed to execute weekgrid");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn exit_2_hour_outside_range() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["2024-01-01", "3", "--end-hour", "24"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("Planner.xlsx").exists());
}

// =============================================================================
// Generation Failures (exit 1, nothing written)
// =============================================================================

#[test]
fn exit_1_end_hour_before_start_hour() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["2024-01-01", "3", "--start-hour", "18", "--end-hour", "9"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("Planner.xlsx").exists());
}

#[test]
fn exit_1_unwritable_destination() {
    let output = Command::new(weekgrid_binary())
        .args(["2024-01-01", "3", "--output", "/no/such/directory/Planner.xlsx"])
        .output()
        .expect("failed to execute weekgrid");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"));
}
