//! Integration tests for file-to-spreadsheet export

use calamine::{open_workbook, Reader, Xlsx};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn get_binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("postman2xlsx");
    path
}

fn run_export(args: &[&str]) -> std::process::Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute postman2xlsx")
}

fn sample_collection() -> &'static str {
    r#"{
        "info": {"name": "sample"},
        "item": [{
            "name": "Auth",
            "item": [{
                "name": "Login",
                "request": {"method": "POST", "url": {"raw": "https://api/login"}}
            }]
        }]
    }"#
}

#[test]
fn test_export_file_to_xlsx() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collection.json");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, sample_collection()).unwrap();

    let result = run_export(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(result.status.success());
    assert!(output.exists());

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let range = workbook.worksheet_range("Postman URLs").unwrap();

    let header: Vec<String> = range
        .rows()
        .next()
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(header, vec!["Folder Level 1", "Request Name", "Method", "URL"]);

    let row: Vec<String> = range
        .rows()
        .nth(1)
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(row, vec!["Auth", "Login", "POST", "https://api/login"]);
}

#[test]
fn test_export_file_to_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collection.json");
    let output = dir.path().join("out.csv");
    fs::write(&input, sample_collection()).unwrap();

    let result = run_export(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--format",
        "csv",
    ]);

    assert!(result.status.success());
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("Folder Level 1,Request Name,Method,URL"));
    assert!(content.contains("Auth,Login,POST,https://api/login"));
}

#[test]
fn test_custom_sheet_name() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collection.json");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, sample_collection()).unwrap();

    let result = run_export(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--sheet-name",
        "My Requests",
    ]);

    assert!(result.status.success());
    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    assert!(workbook.worksheet_range("My Requests").is_ok());
}

#[test]
fn test_preview_shown_on_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collection.json");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, sample_collection()).unwrap();

    let result = run_export(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Sample extracted requests"));
    assert!(stdout.contains("Login"));
}

#[test]
fn test_quiet_mode_suppresses_chatter() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collection.json");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, sample_collection()).unwrap();

    let result = run_export(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--quiet",
    ]);

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert!(output.exists());
}

#[test]
fn test_stats_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collection.json");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, sample_collection()).unwrap();

    let result = run_export(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--stats",
    ]);

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Export Statistics"));
    assert!(stdout.contains("Requests exported: 1"));
    assert!(stdout.contains("Max folder depth: 1"));
}

#[test]
fn test_inline_json_string_input() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.csv");

    let result = run_export(&[
        r#"{"item":[{"name":"R","request":{"method":"GET","url":"https://z"}}]}"#,
        "--output",
        output.to_str().unwrap(),
        "--format",
        "csv",
    ]);

    assert!(result.status.success());
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("R,GET,https://z"));
}
