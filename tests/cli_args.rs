//! Command-line behaviour of the binary that does not need a terminal.

use std::process::Command;

fn jetreward_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jetreward"))
}

#[test]
fn help_lists_options() {
    let output = jetreward_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute jetreward");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for option in ["--config", "--open", "--log-file", "--fail-fetch", "--outbox"] {
        assert!(stdout.contains(option), "help should mention {option}");
    }
}

#[test]
fn version_flag() {
    let output = jetreward_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute jetreward");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_route_exits_before_tui() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = jetreward_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--open")
        .arg("checkout")
        .output()
        .expect("Failed to execute jetreward");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("checkout"));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = jetreward_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute jetreward");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("tick_rate_ms"));
}
