//! CLI integration tests
//!
//! These tests drive the built `cmdtree` binary end to end: script on stdin
//! or from a file, answers on stdout, logs kept off stdout.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const REFERENCE_SCRIPT: &str = "9\n\
INSERT A ROOT\n\
INSERT B A\n\
INSERT C A\n\
INSERT D B\n\
QUERY A\n\
QUERY B\n\
QUERY C\n\
QUERY D\n\
QUERY ROOT\n";

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_cmdtree");
    let mut child = Command::new(cli_bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write script");

    child.wait_with_output().expect("Failed to wait for CLI")
}

#[test]
fn test_cli_run_reference_script_from_stdin() {
    let output = run_with_stdin(&["run"], REFERENCE_SCRIPT);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n1\n0\n0\n4\n");
}

#[test]
fn test_cli_run_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let script_path = temp_dir.path().join("commands.txt");
    fs::write(&script_path, REFERENCE_SCRIPT).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cmdtree"))
        .args(["run", "--input", script_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n1\n0\n0\n4\n");
}

#[test]
fn test_cli_rejections_and_malformed_lines_still_succeed() {
    let script = "INSERT X Y\nQUERY Y\nGARBAGE\nINSERT A ROOT\nINSERT A ROOT\nQUERY A\n";

    let output = run_with_stdin(&["--log-profile", "production", "run"], script);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n");
}

#[test]
fn test_cli_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_cmdtree"))
        .args(["run", "--input", missing.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_run_with_tree() {
    let output = run_with_stdin(&["run", "--tree"], "INSERT A ROOT\nINSERT B A\nQUERY A\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1\n\
         - ROOT (depth 0, subordinates 2)\n\
         \x20 - A (depth 1, subordinates 1)\n\
         \x20   - B (depth 2, subordinates 0)\n"
    );
}

#[test]
fn test_cli_run_with_json_snapshot() {
    let output = run_with_stdin(&["run", "--json"], "INSERT A ROOT\n");

    assert!(output.status.success());
    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["node_count"], 2);
    assert_eq!(snapshot["nodes"][1]["id"], "A");
    assert_eq!(snapshot["nodes"][1]["commander"], "ROOT");
}

#[test]
fn test_cli_demo_prints_propagation_tree() {
    let output = Command::new(env!("CARGO_BIN_EXE_cmdtree"))
        .arg("demo")
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Geass Command Tree:\n- Lelouch: (Root issuer)\n"));
    assert!(stdout.contains("      - Civilians: "));
    assert!(!stdout.contains("Kallen"));
}

#[test]
fn test_cli_demo_custom_target() {
    let output = Command::new(env!("CARGO_BIN_EXE_cmdtree"))
        .args(["demo", "--target", "Kallen", "--command", "rise"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  - Kallen: rise\n"));
    assert!(stdout.contains("    - BlackKnights: rise (via Kallen)\n"));
}

#[test]
fn test_cli_demo_json_carries_hops() {
    let output = Command::new(env!("CARGO_BIN_EXE_cmdtree"))
        .args(["demo", "--json", "--command", "rise"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["base_command"], "rise");
    assert_eq!(tree["entries"][0]["person"], "Lelouch");
    assert_eq!(tree["entries"][1]["person"], "Suzaku");
    assert!(tree["entries"][1]["via"].is_null());
    assert_eq!(tree["entries"][2]["via"], "Suzaku");
}

#[test]
fn test_cli_default_profile_keeps_rejections_quiet() {
    let cli_bin = env!("CARGO_BIN_EXE_cmdtree");
    let mut child = Command::new(cli_bin)
        .arg("run")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"INSERT A ROOT\nINSERT A ROOT\nINSERT X Y\nBOGUS\nQUERY Z\nQUERY ROOT\n")
        .expect("Failed to write script");
    let output = child.wait_with_output().expect("Failed to wait for CLI");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("DEBUG"), "unexpected debug output: {}", stderr);
    assert!(!stderr.contains("insert ignored"));
    assert!(!stderr.contains("skipping malformed line"));
}
