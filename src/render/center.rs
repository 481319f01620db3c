//! Centered text and figlet rendering.
//!
//! Horizontal position of a line is `width/2 - len/2`, clamped at 0. Vertical
//! position is either given or derived from the console height.

use crate::error::{or_empty, RenderError};
use crate::style::{ColorPair, ColorRole};
use crate::text;

use super::figlet::{FigletArt, FigletFont, SmallFont};
use super::{check_area, move_to, push_colors, push_reset, RenderContext};

/// Columns kept free around single-line and plain fallback text.
const PLAIN_MARGIN: usize = 4;

/// Options for the centered text renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenterOptions {
    /// Fixed first row instead of vertical centering
    pub top: Option<usize>,
    /// Overrides the theme's neutral text color
    pub colors: Option<ColorPair>,
}

/// Options for the figlet renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FigletOptions {
    pub top: Option<usize>,
    /// Overrides the theme's figlet color
    pub colors: Option<ColorPair>,
}

/// Which rendering the centered figlet fell back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigletTier {
    /// The requested font fits
    Requested,
    /// The built-in small font fits
    Small,
    /// Nothing fits, plain text
    Plain,
}

/// Column where a run of `len` columns is centered.
#[inline]
pub(crate) fn center_x(width: usize, len: usize) -> usize {
    (width / 2).saturating_sub(len / 2)
}

/// Render word-wrapped text centered on the console. See [`try_render_centered`].
pub fn render_centered(ctx: &RenderContext<'_>, text: &str, options: &CenterOptions) -> String {
    or_empty("render_centered", try_render_centered(ctx, text, options))
}

/// Render word-wrapped text centered on the console.
///
/// Text is wrapped to the console width. Without an explicit `top`, the
/// block of N lines starts at `height/2 - N/2`.
pub fn try_render_centered(
    ctx: &RenderContext<'_>,
    text: &str,
    options: &CenterOptions,
) -> Result<String, RenderError> {
    let lines = text::wrap(text, ctx.width());
    let top = options
        .top
        .unwrap_or_else(|| (ctx.height() / 2).saturating_sub(lines.len() / 2));
    check_area("render_centered", 0, top, ctx.width(), lines.len())?;

    let mut out = String::with_capacity(text.len() + lines.len() * 12 + 32);
    push_colors(
        &mut out,
        options
            .colors
            .unwrap_or_else(|| ctx.theme.pair(ColorRole::NeutralText)),
    );
    for (i, line) in lines.iter().enumerate() {
        move_to(&mut out, center_x(ctx.width(), text::width(line)), top + i);
        out.push_str(line);
    }
    push_reset(&mut out);
    Ok(out)
}

/// Render only the first wrapped line, centered. See [`try_render_centered_one_line`].
pub fn render_centered_one_line(
    ctx: &RenderContext<'_>,
    text: &str,
    options: &CenterOptions,
) -> String {
    or_empty(
        "render_centered_one_line",
        try_render_centered_one_line(ctx, text, options),
    )
}

/// Render the first wrapped line truncated to `width - 4`, centered on row
/// `top` or `height/2`.
pub fn try_render_centered_one_line(
    ctx: &RenderContext<'_>,
    text: &str,
    options: &CenterOptions,
) -> Result<String, RenderError> {
    let lines = text::wrap(text, ctx.width());
    let first = lines.first().map(String::as_str).unwrap_or("");
    let line = text::truncate(first, ctx.width().saturating_sub(PLAIN_MARGIN));
    let top = options.top.unwrap_or(ctx.height() / 2);
    check_area("render_centered_one_line", 0, top, ctx.width(), 1)?;

    let mut out = String::with_capacity(line.len() + 32);
    push_colors(
        &mut out,
        options
            .colors
            .unwrap_or_else(|| ctx.theme.pair(ColorRole::NeutralText)),
    );
    move_to(&mut out, center_x(ctx.width(), text::width(line)), top);
    out.push_str(line);
    push_reset(&mut out);
    Ok(out)
}

/// Decide how centered figlet text will be drawn.
///
/// The requested font is used when its art fits the console; otherwise the
/// built-in small font; otherwise plain text.
pub fn figlet_tier(
    ctx: &RenderContext<'_>,
    text: &str,
    font: &dyn FigletFont,
) -> (FigletTier, Option<FigletArt>) {
    let (width, height) = (ctx.width(), ctx.height());
    if let Some(art) = font.render(text).filter(|a| a.fits(width, height)) {
        return (FigletTier::Requested, Some(art));
    }
    tracing::debug!(font = font.name(), width, height, "figlet art does not fit, trying small font");
    if let Some(art) = SmallFont.render(text).filter(|a| a.fits(width, height)) {
        return (FigletTier::Small, Some(art));
    }
    tracing::debug!(width, height, "small figlet art does not fit, using plain text");
    (FigletTier::Plain, None)
}

/// Render figlet text centered on the console. See [`try_render_centered_figlet`].
pub fn render_centered_figlet(
    ctx: &RenderContext<'_>,
    text: &str,
    font: &dyn FigletFont,
    options: &FigletOptions,
) -> String {
    or_empty(
        "render_centered_figlet",
        try_render_centered_figlet(ctx, text, font, options),
    )
}

/// Render figlet text centered on the console, falling back to the small
/// font and then to plain text when the art does not fit.
pub fn try_render_centered_figlet(
    ctx: &RenderContext<'_>,
    text: &str,
    font: &dyn FigletFont,
    options: &FigletOptions,
) -> Result<String, RenderError> {
    let colors = options
        .colors
        .unwrap_or_else(|| ctx.theme.pair(ColorRole::Figlet));

    let mut out = String::new();
    push_colors(&mut out, colors);
    match figlet_tier(ctx, text, font) {
        (FigletTier::Requested | FigletTier::Small, Some(art)) => {
            let left = center_x(ctx.width(), art.width);
            let top = options
                .top
                .unwrap_or_else(|| (ctx.height() / 2).saturating_sub(art.height / 2));
            check_area("render_centered_figlet", left, top, art.width, art.height)?;
            push_art(&mut out, &art, left, top);
        }
        _ => {
            let line = text::truncate(text, ctx.width().saturating_sub(PLAIN_MARGIN));
            let top = options.top.unwrap_or(ctx.height() / 2);
            check_area("render_centered_figlet", 0, top, ctx.width(), 1)?;
            move_to(&mut out, center_x(ctx.width(), text::width(line)), top);
            out.push_str(line);
        }
    }
    push_reset(&mut out);
    Ok(out)
}

/// Render figlet text at a fixed position. See [`try_render_figlet`].
pub fn render_figlet(
    ctx: &RenderContext<'_>,
    text: &str,
    font: &dyn FigletFont,
    left: usize,
    top: usize,
    colors: Option<ColorPair>,
) -> String {
    or_empty(
        "render_figlet",
        try_render_figlet(ctx, text, font, left, top, colors),
    )
}

/// Render figlet art with its upper-left corner at `(left, top)`.
///
/// No fallback: text the font cannot render is a failure.
pub fn try_render_figlet(
    ctx: &RenderContext<'_>,
    text: &str,
    font: &dyn FigletFont,
    left: usize,
    top: usize,
    colors: Option<ColorPair>,
) -> Result<String, RenderError> {
    let art = font
        .render(text)
        .ok_or_else(|| RenderError::failure("render_figlet", text, "font produced no art"))?;
    check_area("render_figlet", left, top, art.width, art.height)?;
    let mut out = String::new();
    push_colors(
        &mut out,
        colors.unwrap_or_else(|| ctx.theme.pair(ColorRole::Figlet)),
    );
    push_art(&mut out, &art, left, top);
    push_reset(&mut out);
    Ok(out)
}

fn push_art(out: &mut String, art: &FigletArt, left: usize, top: usize) {
    for (i, line) in art.lines.iter().enumerate() {
        move_to(out, left, top + i);
        out.push_str(line);
    }
}
