//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tickid::UniqueId;

fn tickid() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tickid"));
    cmd.env_remove("TICKID_NODE_ADDRESS");
    cmd.env_remove("TICKID_RECORD");
    cmd
}

fn run_tickid(args: &[&str]) -> Output {
    tickid()
        .args(args)
        .output()
        .expect("failed to run tickid binary")
}

fn parse_ids(output: &Output) -> Vec<UniqueId> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect()
}

#[test]
fn generate_prints_one_id_by_default() {
    let output = run_tickid(&["generate", "--node-address", "42"]);
    assert!(output.status.success());
    let ids = parse_ids(&output);
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].node_address(), 42);
}

#[test]
fn generate_count_prints_distinct_ids_in_order() {
    let output = run_tickid(&["generate", "-n", "50", "--node-address", "-3"]);
    assert!(output.status.success());
    let ids = parse_ids(&output);
    assert_eq!(ids.len(), 50);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(ids.iter().all(|id| id.node_address() == -3));
}

#[test]
fn node_address_comes_from_environment() {
    let output = tickid()
        .args(["generate"])
        .env("TICKID_NODE_ADDRESS", "1234")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(parse_ids(&output)[0].node_address(), 1234);
}

#[test]
fn invalid_node_address_environment_fails() {
    let output = tickid()
        .args(["generate"])
        .env("TICKID_NODE_ADDRESS", "eth0")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("TICKID_NODE_ADDRESS"));
}

#[test]
fn audit_echoes_each_id_to_stderr() {
    let args = ["generate", "-n", "3", "--node-address", "1", "--audit"];
    let output = run_tickid(&args);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let audited: Vec<UniqueId> = stderr
        .lines()
        .filter_map(|l| l.strip_prefix("audit: "))
        .map(|id| id.parse().unwrap())
        .collect();
    assert_eq!(audited, parse_ids(&output));
}

#[test]
fn inspect_prints_fields() {
    let output = run_tickid(&["inspect", "10000001-7-2"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Timestamp: 10000001"));
    assert!(stdout.contains("Instant: 1970-01-01T00:00:01.000000100Z"));
    assert!(stdout.contains("Node address: 7"));
    assert!(stdout.contains("Sequence: 2"));
}

#[test]
fn inspect_rejects_malformed_id() {
    let output = run_tickid(&["inspect", "1-2"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid id"));
}

#[test]
fn sort_orders_stdin() {
    let mut child = tickid()
        .arg("sort")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn tickid");
    {
        // Dropping the handle closes the child's stdin.
        let mut stdin = child.stdin.take().unwrap();
        let input = b"12-1-2\n10-20-31\n10-21-2\n10-20-30\n";
        stdin.write_all(input).unwrap();
    }
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "10-20-30\n10-20-31\n10-21-2\n12-1-2\n");
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_tickid(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
