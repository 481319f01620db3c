//! Layout renderers.
//!
//! Every renderer is a pure function of its inputs and a [`RenderContext`]:
//! it returns a string of literal characters interleaved with cursor
//! positioning and color escape sequences. Nothing is written to the device
//! here; hand the string to a [`ConsoleWriter`](crate::console::ConsoleWriter).
//!
//! Each renderer comes in two flavors:
//! - `try_render_*` returns `Result<String, RenderError>`
//! - `render_*` logs failures and returns the empty string instead

mod center;
mod figlet;
mod frame;
mod infobox;
mod percent;
mod progress;
mod separator;
mod table;

pub use center::{
    figlet_tier, render_centered, render_centered_figlet, render_centered_one_line, render_figlet,
    try_render_centered, try_render_centered_figlet, try_render_centered_one_line,
    try_render_figlet, CenterOptions, FigletOptions, FigletTier,
};
pub use figlet::{FigletArt, FigletFont, FileFont, SmallFont, StandardFont};
pub use frame::{
    render_box, render_box_fill, render_frame, try_render_box, try_render_box_fill,
    try_render_frame, BoxOptions, FrameOptions, Geometry,
};
pub use infobox::{render_info_box, show_info_box, try_render_info_box, InfoBoxOptions};
pub use percent::{FillStrategy, PercentRepeat, Proportional, Targeted};
pub use progress::{
    render_progress, render_vertical_progress, try_render_progress,
    try_render_vertical_progress, ProgressOptions, VerticalProgressOptions,
};
pub use separator::{render_separator, SeparatorOptions};
pub use table::{column_positions, render_table, try_render_table, CellOption, TableOptions};

use crate::console::{Console, ConsoleSize};
use crate::error::RenderError;
use crate::style::{ColorPair, Theme, RESET};

/// Everything a renderer may know about its surroundings.
///
/// Built once per render call from a [`Console`] snapshot and a [`Theme`],
/// so the renderer has no hidden global dependency.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub size: ConsoleSize,
    pub theme: &'a Theme,
    /// Terminal cannot interpret escape sequences
    pub dumb: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(size: ConsoleSize, theme: &'a Theme) -> Self {
        Self {
            size,
            theme,
            dumb: false,
        }
    }

    /// Snapshot a console's size and capabilities.
    pub fn from_console(console: &dyn Console, theme: &'a Theme) -> Self {
        Self {
            size: console.size(),
            theme,
            dumb: console.is_dumb(),
        }
    }

    pub fn with_dumb(mut self, dumb: bool) -> Self {
        self.dumb = dumb;
        self
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }
}

/// Append a cursor position directive for the 0-based cell `(col, row)`.
///
/// CSI positions are 1-based and row-first.
#[inline]
pub(crate) fn move_to(buf: &mut String, col: usize, row: usize) {
    buf.push_str(&format!("\x1b[{};{}H", row + 1, col + 1));
}

/// Fail unless every cell of the `width × height` area anchored at
/// `(left, top)` can be addressed by [`move_to`].
///
/// The last cell's 1-based address is `left + width` (or `top + height`);
/// empty areas still position the cursor once.
pub(crate) fn check_area(
    operation: &'static str,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
) -> Result<(), RenderError> {
    let cols = left.checked_add(width.max(1));
    let rows = top.checked_add(height.max(1));
    if cols.is_some() && rows.is_some() {
        Ok(())
    } else {
        Err(RenderError::failure(
            operation,
            format!("{}x{} at ({}, {})", width, height, left, top),
            "area overflows the coordinate space",
        ))
    }
}

/// Append `count` copies of `c`.
#[inline]
pub(crate) fn push_repeat(buf: &mut String, c: char, count: usize) {
    buf.extend(std::iter::repeat(c).take(count));
}

/// Append a color pair.
#[inline]
pub(crate) fn push_colors(buf: &mut String, colors: ColorPair) {
    colors.push_ansi(buf);
}

/// Append the reset sequence.
#[inline]
pub(crate) fn push_reset(buf: &mut String) {
    buf.push_str(RESET);
}
