//! Integration tests for the fancy CLI

use predicates::prelude::*;

use crate::helpers::{fancy, fancy_with_config, stdout_of};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_render_commands() {
    let (mut cmd, _dir) = fancy();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("figlet"))
        .stdout(predicate::str::contains("separator"))
        .stdout(predicate::str::contains("--preview"));
}

#[test]
fn version_shows_package_version() {
    let (mut cmd, _dir) = fancy();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_generate_for_bash() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fancy"));
}

// ============================================================================
// Preview Output
// ============================================================================

#[test]
fn separator_preview_fills_to_width_minus_one() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "20", "--rows", "5", "--preview", "separator", "Title"]);
    assert_eq!(stdout_of(&mut cmd), "- Title -----------\n");
}

#[test]
fn empty_separator_is_a_plain_rule() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "10", "--rows", "2", "--preview", "separator"]);
    assert_eq!(stdout_of(&mut cmd), "---------\n");
}

#[test]
fn box_preview() {
    let (mut cmd, _dir) = fancy();
    cmd.args([
        "--cols", "12", "--rows", "6", "--preview", "box", "--width", "4", "--height", "2",
    ]);
    assert_eq!(stdout_of(&mut cmd), "┌────┐\n│    │\n│    │\n└────┘\n");
}

#[test]
fn frame_with_glyph_preset() {
    let (mut cmd, _dir) = fancy();
    cmd.args([
        "--cols", "12", "--rows", "6", "--preview", "frame", "--width", "3", "--height", "1",
        "--glyphs", "ascii",
    ]);
    assert_eq!(stdout_of(&mut cmd), "+---+\n|   |\n+---+\n");
}

#[test]
fn invalid_glyphs_fail() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["frame", "--width", "3", "--height", "1", "--glyphs", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --glyphs"));
}

#[test]
fn table_preview() {
    let (mut cmd, _dir) = fancy();
    cmd.args([
        "--cols", "30", "--rows", "8", "--preview", "table", "--header", "Id,Name,Flag",
        "--row", "1,alpha,x", "--row", "2,beta,y",
    ]);
    let expected = format!(
        "Id        Name      Flag\n{}\n1         alpha     x\n2         beta      y\n",
        "═".repeat(30)
    );
    assert_eq!(stdout_of(&mut cmd), expected);
}

#[test]
fn table_requires_headers() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["table", "--row", "1,2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--header"));
}

#[test]
fn bordered_progress_preview() {
    let (mut cmd, _dir) = fancy_with_config("[glyphs]\nprogress_filled = \"#\"\n");
    cmd.args([
        "--cols", "14", "--rows", "3", "--preview", "progress", "50", "--border",
        "--left-offset", "2", "--right-offset", "2",
    ]);
    assert_eq!(
        stdout_of(&mut cmd),
        "┌──────────┐\n│#####     │\n└──────────┘\n"
    );
}

#[test]
fn targeted_progress_waits_for_completion() {
    let (mut cmd, _dir) = fancy_with_config("[glyphs]\nprogress_filled = \"#\"\n");
    cmd.args(["--cols", "10", "--rows", "1", "--preview", "progress", "99", "--targeted"]);
    assert_eq!(stdout_of(&mut cmd), "#########\n");

    let (mut cmd, _dir) = fancy_with_config("[glyphs]\nprogress_filled = \"#\"\n");
    cmd.args(["--cols", "10", "--rows", "1", "--preview", "progress", "99"]);
    assert_eq!(stdout_of(&mut cmd), "##########\n");
}

#[test]
fn vertical_progress_preview() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "3", "--rows", "4", "--preview", "progress", "50", "--vertical"]);
    assert_eq!(stdout_of(&mut cmd), "\n\n*\n*\n");
}

#[test]
fn figlet_small_font_is_centered() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "40", "--rows", "9", "--preview", "figlet", "--font", "small", "HI"]);
    // 7x3 art at column 20 - 3, row 4 - 1
    let pad = " ".repeat(17);
    assert_eq!(
        stdout_of(&mut cmd),
        format!("\n\n\n{pad}    ___\n{pad}|_|  |\n{pad}| | _|_\n")
    );
}

#[test]
fn figlet_falls_back_to_plain_text_on_tiny_console() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "6", "--rows", "3", "--preview", "figlet", "HI"]);
    assert_eq!(stdout_of(&mut cmd), "\n  HI\n");
}

#[test]
fn figlet_missing_font_file_fails() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["figlet", "--font", "/nonexistent/font.flf", "HI"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load figlet font"))
        .stderr(predicate::str::contains("load_font failed"))
        .stderr(predicate::str::contains("Failed to write to console").not());
}

#[test]
fn center_preview() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "10", "--rows", "3", "--preview", "center", "hi"]);
    assert_eq!(stdout_of(&mut cmd), "\n    hi\n");
}

#[test]
fn info_does_not_wait_without_a_terminal() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "20", "--rows", "7", "--preview", "info", "--wait", "hello big world"]);
    let out = stdout_of(&mut cmd);
    assert!(out.contains("│hello big│"));
    assert!(out.contains("│world    │"));
}

// ============================================================================
// Raw Output
// ============================================================================

#[test]
fn raw_output_positions_cursor_and_resets_colors() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--cols", "12", "--rows", "6", "box", "--left", "1", "--top", "2", "--width", "2", "--height", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[3;2H┌──┐"))
        .stdout(predicate::str::contains("\x1b[0m"));
}

#[test]
fn dumb_terminal_gets_bare_separator_label() {
    let (mut cmd, _dir) = fancy_with_config("[console]\ndumb = true\n");
    cmd.args(["--cols", "40", "separator", "Build"]);
    assert_eq!(stdout_of(&mut cmd), "- Build\n");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn unknown_theme_fails_with_choices() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["--theme", "neon", "separator", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'neon'"))
        .stderr(predicate::str::contains("ocean"));
}

#[test]
fn invalid_config_reports_file() {
    let (mut cmd, _dir) = fancy_with_config("[theme\n");
    cmd.args(["separator", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}
