//! Drives the pipeline through real processes, with `cat` standing in for the partition-table
//! reader (the image file holds the table text) and `echo` for the file lister.
#![cfg(unix)]

use std::io::Write;

use data_detective::commands::Intent;
use data_detective::constants::VALID_IMAGE_MESSAGE;
use data_detective::{Config, ErrorKind, LocalRunner, Offset, Triage};
use tempfile::NamedTempFile;

const TABLE: &str = "\
GUID Partition Table (EFI)
Offset Sector: 0
Units are in 512-byte sectors

      Slot      Start        End          Length       Description
000:  Meta      0000000000   0000000000   0000000001   Safety Table
001:  -------   0000000000   0000002047   0000002048   Unallocated
004:  000       0000002048   0000206847   0000204800   Basic data partition
005:  001       0000206848   0000411647   0000204800   Basic data partition
";

fn image_with(table: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(table.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn config(image: &str, intent: Intent) -> Config {
    Config::new(image, intent).with_tools("cat", "echo")
}

#[test]
fn readable_image_is_valid() {
    let image = image_with(TABLE);
    let path = image.path().to_str().unwrap();
    let triage = Triage::new(LocalRunner, &config(path, Intent::CheckImage));

    assert_eq!(triage.validate(path).unwrap(), VALID_IMAGE_MESSAGE);
}

#[test]
fn missing_image_reports_reader_diagnostics() {
    let path = "/nonexistent/data-detective/evidence.dd";
    let triage = Triage::new(LocalRunner, &config(path, Intent::CheckImage));

    let err = triage.validate(path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolInvocationError);
    let message = err.to_string();
    assert!(message.starts_with("Error validating image: "));
    assert!(message.contains(path), "{message}");
}

#[test]
fn partition_table_is_captured_verbatim() {
    let image = image_with(TABLE);
    let path = image.path().to_str().unwrap();
    let triage = Triage::new(LocalRunner, &config(path, Intent::ShowPartitions));

    assert_eq!(triage.list_partitions(path).unwrap().text(), TABLE);
}

#[test]
fn first_basic_data_partition_is_resolved() {
    let image = image_with(TABLE);
    let path = image.path().to_str().unwrap();
    let triage = Triage::new(LocalRunner, &config(path, Intent::ShowFiles));

    assert_eq!(
        triage.resolve_offset(path, "Basic data partition").unwrap(),
        Offset::new(2048)
    );
}

#[test]
fn show_files_hands_offset_to_lister() {
    let image = image_with(TABLE);
    let path = image.path().to_str().unwrap();
    let config = config(path, Intent::ShowFiles);

    let listing = Triage::new(LocalRunner, &config).run(&config).unwrap();
    assert_eq!(listing, format!("-o 2048 {path}\n"));
}

#[test]
fn show_files_misses_without_target_row() {
    let image = image_with("004:  000  0000002048  0000206847  0000204800  EFI system partition\n");
    let path = image.path().to_str().unwrap();
    let config = config(path, Intent::ShowFiles);

    let err = Triage::new(LocalRunner, &config).run(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResolutionMiss);
    assert_eq!(err.to_string(), "Failed to find 'Basic data partition'.");
}
