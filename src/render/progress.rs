//! Progress bar rendering, horizontal and vertical.
//!
//! The percentage is mapped onto the available cells by a
//! [`PercentRepeat`] strategy; everything else is plain positioning.

use crate::error::{or_empty, RenderError};
use crate::style::{ColorPair, ColorRole, ProgressGlyphs};

use super::frame::{try_render_frame, FrameOptions, Geometry};
use super::percent::{clamp_percent, FillStrategy, PercentRepeat};
use super::{check_area, move_to, push_colors, push_repeat, push_reset, RenderContext};

/// Options for [`render_progress`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressOptions {
    /// Column of the bar (or of its frame when bordered)
    pub left: usize,
    /// Row of the bar (or of its frame when bordered)
    pub top: usize,
    /// Columns reserved on the left; the bar is `width - (left + right offset)` wide
    pub left_offset: usize,
    pub right_offset: usize,
    pub draw_border: bool,
    pub strategy: FillStrategy,
    /// Overrides the theme's progress fill
    pub colors: Option<ColorPair>,
    pub glyphs: ProgressGlyphs,
    pub frame: FrameOptions,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            left_offset: 0,
            right_offset: 0,
            draw_border: false,
            strategy: FillStrategy::default(),
            colors: None,
            glyphs: ProgressGlyphs::horizontal(),
            frame: FrameOptions::default(),
        }
    }
}

/// Options for [`render_vertical_progress`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalProgressOptions {
    pub left: usize,
    pub top: usize,
    /// Rows reserved above; the bar is `height - (top + bottom offset)` tall
    pub top_offset: usize,
    pub bottom_offset: usize,
    pub draw_border: bool,
    pub strategy: FillStrategy,
    pub colors: Option<ColorPair>,
    pub glyphs: ProgressGlyphs,
    pub frame: FrameOptions,
}

impl Default for VerticalProgressOptions {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            top_offset: 0,
            bottom_offset: 0,
            draw_border: false,
            strategy: FillStrategy::default(),
            colors: None,
            glyphs: ProgressGlyphs::vertical(),
            frame: FrameOptions::default(),
        }
    }
}

/// Split `cells` into (filled, unfilled) counts for `percent`.
///
/// # Arguments
/// * `percent` - Progress, clamped to 0..=100
/// * `cells` - Number of cells available to the bar
/// * `strategy` - How partial progress rounds
pub fn split_cells(percent: f64, cells: usize, strategy: &dyn PercentRepeat) -> (usize, usize) {
    let filled = strategy.filled(clamp_percent(percent), cells).min(cells);
    (filled, cells - filled)
}

/// Render a horizontal progress bar. See [`try_render_progress`].
pub fn render_progress(ctx: &RenderContext<'_>, percent: f64, options: &ProgressOptions) -> String {
    or_empty("render_progress", try_render_progress(ctx, percent, options))
}

/// Render a horizontal progress bar.
///
/// The bar spans `width - (left_offset + right_offset)` cells. When bordered,
/// the frame is anchored at `(left, top)` and the bar sits inside it.
pub fn try_render_progress(
    ctx: &RenderContext<'_>,
    percent: f64,
    options: &ProgressOptions,
) -> Result<String, RenderError> {
    let available = ctx
        .width()
        .saturating_sub(options.left_offset.saturating_add(options.right_offset));
    let (filled, unfilled) = split_cells(percent, available, &options.strategy);

    let mut out = String::with_capacity(available * 2 + 64);
    let (x, y) = if options.draw_border {
        let frame = Geometry::new(options.left, options.top, available, 1);
        out.push_str(&try_render_frame(ctx, frame, &options.frame)?);
        (options.left + 1, options.top + 1)
    } else {
        (options.left, options.top)
    };
    check_area("render_progress", x, y, available, 1)?;

    move_to(&mut out, x, y);
    push_colors(&mut out, progress_colors(ctx, options.colors));
    push_repeat(&mut out, options.glyphs.filled, filled);
    push_colors(&mut out, ctx.theme.fill(ColorRole::Background));
    push_repeat(&mut out, options.glyphs.unfilled, unfilled);
    push_reset(&mut out);
    Ok(out)
}

/// Render a vertical progress bar. See [`try_render_vertical_progress`].
pub fn render_vertical_progress(
    ctx: &RenderContext<'_>,
    percent: f64,
    options: &VerticalProgressOptions,
) -> String {
    or_empty(
        "render_vertical_progress",
        try_render_vertical_progress(ctx, percent, options),
    )
}

/// Render a vertical progress bar, filled bottom-up.
///
/// The bar is one column wide and `height - (top_offset + bottom_offset)`
/// rows tall. When bordered it becomes a three column strip: left edge, the
/// bar, right edge, with caps above and below.
pub fn try_render_vertical_progress(
    ctx: &RenderContext<'_>,
    percent: f64,
    options: &VerticalProgressOptions,
) -> Result<String, RenderError> {
    let max_height = ctx
        .height()
        .saturating_sub(options.top_offset.saturating_add(options.bottom_offset));
    let (filled, _) = split_cells(percent, max_height, &options.strategy);

    let mut out = String::with_capacity(max_height * 24 + 64);
    let (x, y) = if options.draw_border {
        let frame = Geometry::new(options.left, options.top, 1, max_height);
        out.push_str(&try_render_frame(ctx, frame, &options.frame)?);
        (options.left + 1, options.top + 1)
    } else {
        (options.left, options.top)
    };
    check_area("render_vertical_progress", x, y, 1, max_height)?;

    let fill = progress_colors(ctx, options.colors);
    let empty = ctx.theme.fill(ColorRole::Background);
    for i in 0..max_height {
        let row = y + (max_height - 1 - i);
        move_to(&mut out, x, row);
        if i < filled {
            push_colors(&mut out, fill);
            out.push(options.glyphs.filled);
        } else {
            push_colors(&mut out, empty);
            out.push(options.glyphs.unfilled);
        }
    }
    push_reset(&mut out);
    Ok(out)
}

fn progress_colors(ctx: &RenderContext<'_>, colors: Option<ColorPair>) -> ColorPair {
    colors.unwrap_or_else(|| ctx.theme.fill(ColorRole::Progress))
}
