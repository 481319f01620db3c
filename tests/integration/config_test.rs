//! Integration tests for config loading and the config subcommands

use predicates::prelude::*;

use fancy::render::FillStrategy;
use fancy::style::{Color, ColorRole, FrameGlyphs};
use fancy::Config;

use crate::helpers::{config_path, fancy, fancy_with_config, stdout_of};

#[test]
fn config_path_prints_explicit_location() {
    let (mut cmd, dir) = fancy();
    cmd.args(["config", "path"]);
    let expected = format!("{}\n", config_path(&dir).display());
    assert_eq!(stdout_of(&mut cmd), expected);
}

#[test]
fn config_show_prints_defaults_when_file_missing() {
    let (mut cmd, _dir) = fancy();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[theme]"))
        .stdout(predicate::str::contains("preset = \"default\""))
        .stdout(predicate::str::contains("targeted = false"));
}

#[test]
fn config_show_reflects_file() {
    let (mut cmd, _dir) = fancy_with_config("[theme]\npreset = \"ocean\"\n\n[progress]\ntargeted = true\n");
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preset = \"ocean\""))
        .stdout(predicate::str::contains("targeted = true"));
}

#[test]
fn load_from_file_applies_every_section() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[theme]
preset = "classic"

[theme.colors]
figlet = "#ff0000"
table_header = "196"

[glyphs]
frame = "rounded"

[progress]
targeted = true

[console]
width = 120
dumb = true
"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let theme = config.theme().unwrap();
    assert_eq!(theme.color(ColorRole::Figlet), Color::Rgb(255, 0, 0));
    assert_eq!(theme.color(ColorRole::TableHeader), Color::Indexed(196));
    assert_eq!(theme.color(ColorRole::BoxBackground), Color::Blue);
    assert_eq!(config.frame_glyphs().unwrap(), FrameGlyphs::rounded());
    assert_eq!(config.fill_strategy(), FillStrategy::Targeted);
    assert_eq!(config.console.width, Some(120));
    assert_eq!(config.console.height, None);
    assert_eq!(config.console.dumb, Some(true));
}

#[test]
fn config_frame_glyphs_reach_the_renderer() {
    let (mut cmd, _dir) = fancy_with_config("[glyphs]\nframe = \"double\"\n");
    cmd.args(["--cols", "8", "--rows", "4", "--preview", "frame", "--width", "2", "--height", "1"]);
    assert_eq!(stdout_of(&mut cmd), "╔══╗\n║  ║\n╚══╝\n");
}

#[test]
fn config_console_size_is_overridden_by_flags() {
    let (mut cmd, _dir) = fancy_with_config("[console]\nwidth = 30\nheight = 3\n");
    cmd.args(["--preview", "separator"]);
    assert_eq!(stdout_of(&mut cmd), format!("{}\n", "-".repeat(29)));

    let (mut cmd, _dir) = fancy_with_config("[console]\nwidth = 30\nheight = 3\n");
    cmd.args(["--cols", "5", "--preview", "separator"]);
    assert_eq!(stdout_of(&mut cmd), "----\n");
}
