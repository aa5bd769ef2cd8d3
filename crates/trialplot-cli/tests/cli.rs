// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end tests driving the `trialplot` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const TRIALS: &str = "\
N,R,M,goroutines,threads
10,10,1000,0.010,0.050
10,10,1000,0.012,0.052
100,10,1000,0.100,0.500
";

fn trialplot(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_trialplot"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn trialplot");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait trialplot")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn test_chart_to_stdout() {
    let output = trialplot(&[], TRIALS);
    assert!(output.status.success(), "{}", stderr(&output));
    let svg = stdout(&output);
    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("goroutines"));
    assert!(svg.contains("threads"));
}

#[test]
fn test_table_precedes_chart() {
    let output = trialplot(&["--table"], TRIALS);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    let svg_at = text.find("<svg").expect("svg in output");
    let lines: Vec<&str> = text[..svg_at].lines().collect();
    assert_eq!(
        lines,
        vec![
            "| | 100 | 1000 |",
            "|---|---|---|",
            "| goroutines | 9.17 | 10.00 |",
            "| threads | 1.96 | 2.00 |",
        ]
    );
}

#[test]
fn test_chart_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("throughput.svg");
    let output = trialplot(&["--table", path.to_str().unwrap()], TRIALS);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("| |"));
    assert!(!text.contains("<svg"));
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn test_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("trials.csv");
    std::fs::write(&input, TRIALS).unwrap();
    let output = trialplot(&["-t", "-i", input.to_str().unwrap()], "");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("| goroutines |"));
}

#[test]
fn test_missing_header_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.svg");
    let output = trialplot(
        &["--table", path.to_str().unwrap()],
        "10,10,1000,0.01\nN,R,M,t\n",
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("before the `N` header row"));
    assert!(output.stdout.is_empty());
    assert!(!Path::new(&path).exists());
}

#[test]
fn test_malformed_number_is_fatal() {
    let output = trialplot(&[], "N,R,M,t\n10,ten,1,1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot parse \"ten\""));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unwritable_output_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("chart.svg");
    let output = trialplot(&["--table", path.to_str().unwrap()], TRIALS);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot open"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_split_by_m_series() {
    let input = "N,R,M,t\n2,2,1,1\n2,2,3,1\n";
    let merged = trialplot(&["--table"], input);
    assert!(merged.status.success());
    assert!(stdout(&merged).contains("| t | 0.00 |"));

    let split = trialplot(&["--table", "--split-by-m"], input);
    assert!(split.status.success(), "{}", stderr(&split));
    let text = stdout(&split);
    assert!(text.contains("| t (m=1) |"));
    assert!(text.contains("| t (m=3) |"));
}

#[test]
fn test_overwrite_is_logged() {
    let output = trialplot(&[], "N,R,M,t\n2,2,1,1\n2,2,3,1\n");
    assert!(output.status.success());
    assert!(stderr(&output).contains("summary point replaced"));
}

#[test]
fn test_sort_orders_columns() {
    let input = "N,R,M,t\n100,1,1,1\n1,1,1,1\n10,1,1,1\n";
    let unsorted = trialplot(&["--table"], input);
    assert!(stdout(&unsorted).starts_with("| | 100 | 1 | 10 |"));
    let sorted = trialplot(&["--table", "--sort"], input);
    assert!(stdout(&sorted).starts_with("| | 1 | 10 | 100 |"));
}
