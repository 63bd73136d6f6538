//! End-to-end tests driving the `timediff` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn timediff_binary() -> String {
    env!("CARGO_BIN_EXE_timediff").to_string()
}

/// Command isolated from the user's config directory and environment.
fn timediff(home: &Path) -> Command {
    let mut cmd = Command::new(timediff_binary());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TIMEDIFF_BLOCK_TAG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "timediff should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

const NOTE: &str = "# Log

```timediff
09:00 - 10:30 planning
notes in between
10:30 - 12:00
```

```timediff
13:00 - 13:45
```
";

#[test]
fn test_total_for_document() {
    let temp = TempDir::new().unwrap();
    let note = temp.path().join("day.md");
    std::fs::write(&note, NOTE).unwrap();

    let output = timediff(temp.path())
        .arg("total")
        .arg(&note)
        .output()
        .unwrap();

    assert_eq!(stdout_of(&output), "Total: 225min - 3h45min\n");
}

#[test]
fn test_total_json() {
    let temp = TempDir::new().unwrap();
    let note = temp.path().join("day.md");
    std::fs::write(&note, NOTE).unwrap();

    let output = timediff(temp.path())
        .args(["total", "--json"])
        .arg(&note)
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["total_minutes"], 225);
    assert_eq!(value["blocks"].as_array().unwrap().len(), 2);
}

#[test]
fn test_block_from_stdin() {
    let temp = TempDir::new().unwrap();

    let mut child = timediff(temp.path())
        .arg("block")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"08:00 - 09:00\nnote\n09:00 - 09:45\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(
        stdout_of(&output),
        "08:00 - 09:00\t1h0min\nnote\n09:00 - 09:45\t0h45min\nTotal: 1h45min\n"
    );
}

#[test]
fn test_config_file_changes_tag() {
    let temp = TempDir::new().unwrap();
    let note = temp.path().join("day.md");
    std::fs::write(&note, "```hours\n10:00 - 10:20\n```\n").unwrap();
    let config = temp.path().join("timediff.toml");
    std::fs::write(&config, "block_tag = \"hours\"\n").unwrap();

    let output = timediff(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("total")
        .arg(&note)
        .output()
        .unwrap();

    assert_eq!(stdout_of(&output), "Total: 20min - 0h20min\n");
}

#[test]
fn test_env_changes_tag() {
    let temp = TempDir::new().unwrap();
    let note = temp.path().join("day.md");
    std::fs::write(&note, "```hours\n10:00 - 10:20\n```\n").unwrap();

    let output = timediff(temp.path())
        .env("TIMEDIFF_BLOCK_TAG", "hours")
        .arg("total")
        .arg(&note)
        .output()
        .unwrap();

    assert_eq!(stdout_of(&output), "Total: 20min - 0h20min\n");
}

#[test]
fn test_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    let output = timediff(temp.path())
        .arg("report")
        .arg(temp.path().join("nope.md"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr was: {stderr}");
}

#[test]
fn test_empty_tag_rejected() {
    let temp = TempDir::new().unwrap();
    let note = temp.path().join("day.md");
    std::fs::write(&note, NOTE).unwrap();

    let output = timediff(temp.path())
        .args(["total", "--tag", ""])
        .arg(&note)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("block tag cannot be empty"), "stderr was: {stderr}");
}
