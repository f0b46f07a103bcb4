//! Tests of the `exactfit` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

fn exactfit(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_exactfit"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn text_report_on_stdout() {
    let out = exactfit(&[], SAMPLE);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "degree: 2\ncoefficients a0..am:\n3 0 1\nfits_all_points: true\n"
    );
}

#[test]
fn json_report() {
    let out = exactfit(&["--format", "json", "-"], SAMPLE);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "{\"degree\":2,\"coefficients\":[\"3\",\"0\",\"1\"],\"fits_all_points\":true}\n"
    );
}

#[test]
fn k_flag_overrides_document() {
    let out = exactfit(&["-k", "2", "--parallel-verify"], SAMPLE);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("degree: 1\n"));
    assert!(stdout.ends_with("fits_all_points: false\n"));
}

#[test]
fn failure_prints_nothing_on_stdout() {
    let out = exactfit(&["-k", "9"], SAMPLE);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("not enough points"));
}

#[test]
fn missing_file() {
    let out = exactfit(&["/nonexistent/points.json"], "");
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("failed to open"));
}
