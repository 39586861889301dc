use std::fs;
use std::path::PathBuf;

use wkt_symdiff::{process_file, GeometryKind, PipelineError};

fn run(dir: &tempfile::TempDir, input_text: &str) -> (Result<wkt_symdiff::RunReport, PipelineError>, PathBuf) {
    let input = dir.path().join("input.txt");
    let output = dir.path().join("result.txt");
    fs::write(&input, input_text).unwrap();
    (process_file(&input, &output), output)
}

#[test]
fn identical_points_cancel_and_the_polygon_survives() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(
        &dir,
        "POINT (0 0)\nPOINT (0 0)\nPOLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))\n",
    );

    let report = result.unwrap();
    assert_eq!(report.decoded, 3);
    assert_eq!(report.cancelled, vec![GeometryKind::Point]);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("POLYGON"));
}

#[test]
fn malformed_lines_are_skipped_and_processing_continues() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(
        &dir,
        "POLYGON (()\nPOINT (1 1)\nnot wkt at all\nPOINT (2 2)\n",
    );

    let report = result.unwrap();
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].line_number, 1);
    assert_eq!(report.skipped[1].line_number, 3);
    assert_eq!(report.decoded, 2);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("MULTIPOINT"));
}

#[test]
fn empty_file_is_an_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(&dir, "");
    assert!(matches!(result, Err(PipelineError::EmptyFile)));
    assert!(!output.exists());
}

#[test]
fn all_undecodable_lines_is_an_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(&dir, "garbage\nmore garbage\n");
    assert!(matches!(
        result,
        Err(PipelineError::NothingDecoded { line_count: 2 })
    ));
    assert!(!output.exists());
}

#[test]
fn everything_cancelling_writes_an_explicitly_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(&dir, "POINT (3 3)\nPOINT (3 3)\n");

    let report = result.unwrap();
    assert_eq!(report.cancelled, vec![GeometryKind::Point]);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("GEOMETRYCOLLECTION"));
    assert!(lines[0].contains("EMPTY"));
}

#[test]
fn mixed_categories_write_one_line_per_result() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(
        &dir,
        "POINT (9 9)\nLINESTRING (0 0, 1 0)\nPOLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))\n",
    );

    result.unwrap();
    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("POLYGON"));
    assert!(lines[1].starts_with("LINESTRING"));
    assert!(lines[2].starts_with("POINT"));
}

#[test]
fn unsupported_geometries_are_reported_not_reduced() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _output) = run(
        &dir,
        "MULTIPOINT ((0 0), (1 1))\nPOINT (5 5)\n",
    );

    let report = result.unwrap();
    assert_eq!(report.unsupported, 1);
    assert_eq!(report.decoded, 2);
    assert_eq!(report.output_lines.len(), 1);
    assert!(report.output_lines[0].starts_with("POINT"));
}
