//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

use fancy::terminal::Screen;

/// A `fancy` command isolated from the user's config and terminal.
///
/// The config points at a file that does not exist, so defaults apply, and
/// `TERM` names a capable terminal.
pub fn fancy() -> (Command, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fancy"));
    cmd.env("TERM", "xterm-256color")
        .env_remove("FANCY_LOG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    (cmd, dir)
}

/// A `fancy` command using a config file with `content`.
pub fn fancy_with_config(content: &str) -> (Command, TempDir) {
    let (cmd, dir) = fancy();
    fs::write(config_path(&dir), content).expect("Failed to write config");
    (cmd, dir)
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

/// Run `cmd` and return its stdout, asserting success.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute fancy");
    assert!(
        output.status.success(),
        "fancy failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Replay rendered output on a virtual screen.
pub fn replay(width: usize, height: usize, output: &str) -> Screen {
    let mut screen = Screen::new(width, height);
    screen.feed(output);
    screen
}
