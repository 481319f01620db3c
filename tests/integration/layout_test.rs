//! Layout tests: renderer output replayed on the virtual screen

use fancy::console::{ConsoleSize, FixedConsole};
use fancy::render::{
    self, BoxOptions, CellOption, CenterOptions, FigletOptions, FrameOptions, Geometry,
    ProgressOptions, RenderContext, SeparatorOptions, SmallFont, TableOptions,
};
use fancy::style::{Color, ColorPair, ColorRole, FrameGlyphs, ProgressGlyphs, Theme};

use crate::helpers::replay;

#[test]
fn table_layout() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(30, 8), &theme);
    let rows = vec![vec!["1", "alpha", "x"], vec!["2", "beta", "y"]];
    let options = TableOptions {
        separate_rows: true,
        ..Default::default()
    };
    let out = render::render_table(&ctx, &["Id", "Name", "Flag"], &rows, &options);
    insta::assert_snapshot!(replay(30, 8, &out).dump(), @r"
Id        Name      Flag
══════════════════════════════
1         alpha     x
══════════════════════════════
2         beta      y
══════════════════════════════
");
}

#[test]
fn bordered_progress_layout() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(14, 3), &theme);
    let options = ProgressOptions {
        left_offset: 2,
        right_offset: 2,
        draw_border: true,
        glyphs: ProgressGlyphs {
            filled: '#',
            unfilled: '.',
        },
        ..Default::default()
    };
    let out = render::render_progress(&ctx, 30.0, &options);
    insta::assert_snapshot!(replay(14, 3, &out).dump(), @r"
┌──────────┐
│###.......│
└──────────┘
");
}

#[test]
fn figlet_at_fixed_position() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(20, 4), &theme);
    let out = render::render_figlet(&ctx, "OK", &SmallFont, 0, 0, None);
    assert_eq!(replay(20, 4, &out).lines(), vec![" _", r"/ \ |/", r"\_/ |\"]);
}

#[test]
fn composed_screen() {
    let theme = Theme::classic();
    let console = FixedConsole::new(24, 8);
    let ctx = RenderContext::from_console(&console, &theme);

    let mut out = render::render_box(&ctx, Geometry::new(0, 0, 22, 4), &BoxOptions::default());
    out.push_str(&render::render_centered(
        &ctx,
        "status",
        &CenterOptions {
            top: Some(1),
            ..Default::default()
        },
    ));
    out.push_str(&render::render_progress(
        &ctx,
        50.0,
        &ProgressOptions {
            left: 1,
            top: 3,
            left_offset: 2,
            right_offset: 2,
            glyphs: ProgressGlyphs {
                filled: '=',
                unfilled: ' ',
            },
            ..Default::default()
        },
    ));

    let screen = replay(24, 8, &out);
    insta::assert_snapshot!(screen.dump(), @r"
┌──────────────────────┐
│        status        │
│                      │
│==========            │
│                      │
└──────────────────────┘
");
    // Progress fill carries the theme's progress color over the box background
    assert_eq!(screen.cell(1, 3).style.bg, theme.color(ColorRole::Progress));
    assert_eq!(screen.cell(15, 3).style.bg, theme.color(ColorRole::Background));
    assert_eq!(screen.cell(1, 2).style.bg, Color::Blue);
}

#[test]
fn separator_colors_label_and_rule_separately() {
    let theme = Theme::ocean();
    let ctx = RenderContext::new(ConsoleSize::new(16, 1), &theme);
    let options = SeparatorOptions {
        print_suffix: true,
        colors: Some(ColorPair::fg(Color::Red)),
    };
    let screen = replay(16, 1, &render::render_separator(&ctx, "Log", &options));
    assert_eq!(screen.line(0), "- Log ---------");
    assert_eq!(screen.cell(0, 0).style.fg, theme.color(ColorRole::Separator));
    assert_eq!(screen.cell(2, 0).style.fg, Color::Red);
    assert_eq!(screen.cell(10, 0).style.fg, theme.color(ColorRole::Separator));
}

#[test]
fn cell_override_only_touches_its_cell() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(20, 4), &theme);
    let options = TableOptions {
        cell_options: vec![CellOption {
            row: 1,
            column: 0,
            colors: ColorPair::new(Color::Black, Color::Yellow),
        }],
        ..Default::default()
    };
    let rows = vec![vec!["a", "b"], vec!["c", "d"]];
    let screen = replay(20, 4, &render::render_table(&ctx, &["H", "I"], &rows, &options));
    assert_eq!(screen.cell(0, 3).style.bg, Color::Yellow);
    assert_eq!(screen.cell(0, 2).style.bg, theme.color(ColorRole::Background));
    assert_eq!(screen.cell(10, 3).style.fg, theme.color(ColorRole::TableValue));
}

#[test]
fn centered_figlet_fallback_is_stable() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(9, 5), &theme);
    let font = render::StandardFont::new().unwrap();
    let first = render::render_centered_figlet(&ctx, "Hello", &font, &FigletOptions::default());
    let second = render::render_centered_figlet(&ctx, "Hello", &font, &FigletOptions::default());
    assert_eq!(first, second);
    // Neither font fits 9 columns, so plain text cut to 5 columns remains
    assert_eq!(replay(9, 5, &first).dump(), "\n\n  Hello");
}

#[test]
fn frame_glyph_override() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(10, 4), &theme);
    let options = FrameOptions {
        glyphs: "abcdefgh".parse::<FrameGlyphs>().unwrap(),
        colors: None,
    };
    let screen = replay(10, 4, &render::render_frame(&ctx, Geometry::new(0, 0, 2, 1), &options));
    assert_eq!(screen.lines(), vec!["aeeb", "g  h", "cffd"]);
}
