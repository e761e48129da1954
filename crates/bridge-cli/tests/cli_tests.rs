//! Integration tests for the bridge-config binary.
//!
//! These tests exercise the compiled binary against payload files written
//! to a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const CLIENT_INFO: &str = r#"{
    "name": "jetbrains",
    "version": "6.0.0",
    "ideVersion": "2024.1",
    "capabilities": { "globalState": "server-managed", "webview": "native" }
}"#;

const EXTENSION_CONFIG: &str = r#"{
    "serverEndpoint": "https://sourcegraph.test",
    "customHeaders": { "X-Requested-With": "agent-test" },
    "autocompleteAdvancedProvider": "fireworks",
    "verboseDebug": true,
    "codebase": "github.com/example/repo",
    "customConfigurationJson": "{\"cody.experimental.noodle\": true, \"editor.insertSpaces\": false}"
}"#;

fn bridge_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bridge-config"));
    cmd.env_remove("BRIDGE_CLIENT_INFO")
        .env_remove("BRIDGE_EXTENSION_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

struct Payloads {
    _dir: TempDir,
    client_info: PathBuf,
    extension_config: PathBuf,
}

fn payloads() -> Payloads {
    let dir = tempdir().unwrap();
    let client_info = dir.path().join("client-info.json");
    let extension_config = dir.path().join("extension-config.json");
    fs::write(&client_info, CLIENT_INFO).unwrap();
    fs::write(&extension_config, EXTENSION_CONFIG).unwrap();

    Payloads {
        _dir: dir,
        client_info,
        extension_config,
    }
}

fn with_payloads<'a>(cmd: &'a mut Command, payloads: &Payloads) -> &'a mut Command {
    cmd.arg("--client-info")
        .arg(&payloads.client_info)
        .arg("--extension-config")
        .arg(&payloads.extension_config)
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).unwrap()
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_output() {
    bridge_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("dump"));
}

#[test]
fn test_missing_command_fails() {
    bridge_cmd().assert().failure();
}

// ============================================================================
// get
// ============================================================================

#[test]
fn test_get_projected_value() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    with_payloads(&mut cmd, &payloads)
        .args(["get", "cody.serverEndpoint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"https://sourcegraph.test\""));
}

#[test]
fn test_get_section_object() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    let output = with_payloads(&mut cmd, &payloads)
        .args(["get", "cody.autocomplete"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output.stdout),
        json!({"enabled": true, "advanced": {"provider": "fireworks"}})
    );
}

#[test]
fn test_get_custom_json_value() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    with_payloads(&mut cmd, &payloads)
        .args(["get", "cody.experimental.noodle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_get_missing_path_fails() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    with_payloads(&mut cmd, &payloads)
        .args(["get", "cody.nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cody.nonexistent"));
}

#[test]
fn test_get_missing_path_with_default() {
    bridge_cmd()
        .args(["get", "editor.tabSize", "--default", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4"));
}

#[test]
fn test_get_without_payloads_returns_constants() {
    bridge_cmd()
        .args(["get", "cody.telemetry.level"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"agent\""));
}

// ============================================================================
// --set
// ============================================================================

#[test]
fn test_set_overrides_projected_value() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    with_payloads(&mut cmd, &payloads)
        .args(["--set", "cody.codebase=github.com/other/repo"])
        .args(["get", "cody.codebase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com/other/repo"));
}

#[test]
fn test_set_json_value() {
    let output = bridge_cmd()
        .args(["--set", r#"editor={"tabSize":2}"#, "get", "editor"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout), json!({"tabSize": 2}));
}

#[test]
fn test_repeated_set_accumulates() {
    let output = bridge_cmd()
        .args([
            "--set",
            "editor.tabSize=4",
            "--set",
            "editor.insertSpaces=true",
            "--set",
            "editor.tabSize=2",
            "get",
            "editor",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output.stdout),
        json!({"tabSize": 2, "insertSpaces": true})
    );
}

#[test]
fn test_set_without_separator_fails() {
    bridge_cmd()
        .args(["--set", "editor.tabSize", "dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH=VALUE"));
}

// ============================================================================
// has / dump
// ============================================================================

#[test]
fn test_has_reports_presence() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    with_payloads(&mut cmd, &payloads)
        .args(["has", "cody.customHeaders"])
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));

    let mut cmd = bridge_cmd();
    with_payloads(&mut cmd, &payloads)
        .args(["has", "cody.accessToken"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn test_dump_contains_all_layers() {
    let payloads = payloads();
    let mut cmd = bridge_cmd();
    let output = with_payloads(&mut cmd, &payloads)
        .args(["--set", "editor.tabSize=2", "dump"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tree = stdout_json(&output.stdout);
    assert_eq!(tree["cody"]["serverEndpoint"], json!("https://sourcegraph.test"));
    assert_eq!(tree["cody"]["experimental"]["noodle"], json!(true));
    assert_eq!(tree["editor"], json!({"insertSpaces": false, "tabSize": 2}));
}

// ============================================================================
// Payload errors
// ============================================================================

#[test]
fn test_missing_payload_file_fails() {
    bridge_cmd()
        .args(["--client-info", "/nonexistent/client-info.json", "dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_malformed_payload_fails() {
    let dir = tempdir().unwrap();
    let path: &Path = &dir.path().join("bad.json");
    fs::write(path, "{not json").unwrap();

    bridge_cmd()
        .arg("--extension-config")
        .arg(path)
        .arg("dump")
        .assert()
        .failure();
}

#[test]
fn test_payload_from_environment() {
    let payloads = payloads();
    bridge_cmd()
        .env("BRIDGE_EXTENSION_CONFIG", &payloads.extension_config)
        .args(["get", "cody.debug.verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}
