//! Replay tests: renderer output interpreted by the virtual screen.

use crate::console::ConsoleSize;
use crate::render::{render_box, render_frame, BoxOptions, FrameOptions, Geometry, RenderContext};
use crate::style::{Color, ColorRole, FrameGlyphs, Theme};

use super::Screen;

fn replay(width: usize, height: usize, output: &str) -> Screen {
    let mut screen = Screen::new(width, height);
    screen.feed(output);
    screen
}

#[test]
fn frame_replays_as_closed_rectangle() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(12, 6), &theme);
    let out = render_frame(&ctx, Geometry::new(0, 0, 4, 2), &FrameOptions::default());
    let screen = replay(12, 6, &out);
    assert_eq!(screen.lines(), vec!["┌────┐", "│    │", "│    │", "└────┘"]);
}

#[test]
fn double_frame_at_offset() {
    let theme = Theme::default();
    let ctx = RenderContext::new(ConsoleSize::new(12, 6), &theme);
    let options = FrameOptions {
        glyphs: FrameGlyphs::double(),
        colors: None,
    };
    let out = render_frame(&ctx, Geometry::new(2, 1, 3, 1), &options);
    let screen = replay(12, 6, &out);
    assert_eq!(screen.dump(), "\n  ╔═══╗\n  ║   ║\n  ╚═══╝");
}

#[test]
fn box_interior_carries_fill_background() {
    let theme = Theme::classic();
    let ctx = RenderContext::new(ConsoleSize::new(10, 5), &theme);
    let out = render_box(&ctx, Geometry::new(0, 0, 3, 2), &BoxOptions::default());
    let screen = replay(10, 5, &out);
    assert_eq!(screen.cell(1, 1).style.bg, theme.color(ColorRole::BoxBackground));
    assert_eq!(screen.cell(3, 2).style.bg, Color::Blue);
    // The frame itself is drawn in the border color
    assert_eq!(screen.cell(0, 0).style.fg, theme.color(ColorRole::Border));
}
