//! Exit status and output of the binary.
#![cfg(unix)]

use std::io::Write;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

fn data_detective(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_data_detective"))
        .args(args)
        .env("TERM", "dumb")
        .output()
        .unwrap()
}

fn image_with(table: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(table.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn conflicting_actions_fail_before_spawning_tools() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("touched");
    let marker_path = marker.to_str().unwrap();

    // `touch` as the reader would create the marker if it ever ran.
    let output = data_detective(&[
        "-i",
        marker_path,
        "--mmls",
        "touch",
        "--check-image",
        "--show-partitions",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used together"));
    assert!(!marker.exists());
}

#[test]
fn missing_image_argument_fails() {
    let output = data_detective(&["--check-image"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("-i/--image is required"));
}

#[test]
fn unknown_argument_fails_with_status_one() {
    let output = data_detective(&["-i", "disk.dd", "--carve"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_succeeds() {
    let output = data_detective(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--show-files"));
}

#[test]
fn default_action_validates_image() {
    let image = image_with("1: 00 2048 206847 204800 Basic data partition\n");
    let output = data_detective(&["-i", image.path().to_str().unwrap(), "--mmls", "cat"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(
        String::from_utf8_lossy(&output.stdout)
            .contains("The specified image is valid and contains partitions.")
    );
}

#[test]
fn show_files_on_missing_image_fails() {
    let output = data_detective(&[
        "-i",
        "/nonexistent/data-detective/evidence.dd",
        "--mmls",
        "cat",
        "--fls",
        "echo",
        "--show-files",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("-o "), "file lister ran: {stdout}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error validating image"));
}

#[test]
fn show_files_reports_missing_partition() {
    let image = image_with("1: 00 2048 206847 204800 EFI system partition\n");
    let output = data_detective(&[
        "-i",
        image.path().to_str().unwrap(),
        "--mmls",
        "cat",
        "--fls",
        "echo",
        "--show-files",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Failed to find 'Basic data partition'.")
    );
}

#[test]
fn show_files_prints_listing() {
    let image = image_with("1: 00 2048 206847 204800 Basic data partition\n");
    let path = image.path().to_str().unwrap();
    let output = data_detective(&["-i", path, "--mmls", "cat", "--fls", "echo", "--show-files"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(&format!("-o 2048 {path}")));
}
