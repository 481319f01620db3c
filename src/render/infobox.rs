//! Informational box: wrapped text in a filled frame in the middle of the
//! console, optionally held on screen until a key is pressed.

use crate::console::{CancelToken, ConsoleWriter, KeyPress, KeySource};
use crate::error::{or_empty, RenderError};
use crate::style::{ColorPair, ColorRole};
use crate::text;

use super::center::center_x;
use super::frame::{try_render_box, BoxOptions, Geometry};
use super::{move_to, push_colors, push_reset, RenderContext};

/// Columns of the console kept free around the text.
const TEXT_MARGIN: usize = 8;

/// Options for [`render_info_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoBoxOptions {
    pub frame: BoxOptions,
    /// Overrides the text colors (neutral text on the box background)
    pub text_colors: Option<ColorPair>,
}

/// Render an info box. See [`try_render_info_box`].
pub fn render_info_box(ctx: &RenderContext<'_>, text: &str, options: &InfoBoxOptions) -> String {
    or_empty("render_info_box", try_render_info_box(ctx, text, options))
}

/// Render `text` wrapped to `width - 8` inside a box centered on the console.
///
/// Lines that do not fit the console height are dropped.
pub fn try_render_info_box(
    ctx: &RenderContext<'_>,
    text: &str,
    options: &InfoBoxOptions,
) -> Result<String, RenderError> {
    let (width, height) = (ctx.width(), ctx.height());
    if width < 3 || height < 3 {
        return Err(RenderError::failure(
            "render_info_box",
            format!("{}x{}", width, height),
            "console too small for a box",
        ));
    }

    let mut lines = text::wrap(text, width.saturating_sub(TEXT_MARGIN));
    let max_lines = height - 2;
    if lines.len() > max_lines {
        tracing::warn!(lines = lines.len(), max_lines, "info box text clipped to console height");
        lines.truncate(max_lines);
    }
    let inner_width = lines
        .iter()
        .map(|l| text::width(l))
        .max()
        .unwrap_or(0)
        .max(1);
    let inner_height = lines.len().max(1);

    let geometry = Geometry::new(
        center_x(width, inner_width + 2),
        (height / 2).saturating_sub((inner_height + 2) / 2),
        inner_width,
        inner_height,
    );
    let mut out = try_render_box(ctx, geometry, &options.frame)?;

    push_colors(
        &mut out,
        options
            .text_colors
            .unwrap_or_else(|| ctx.theme.fill(ColorRole::BoxBackground)),
    );
    for (i, line) in lines.iter().enumerate() {
        move_to(&mut out, geometry.left + 1, geometry.top + 1 + i);
        out.push_str(line);
    }
    push_reset(&mut out);
    Ok(out)
}

/// Write an info box and block until a key is pressed.
///
/// The cursor stays hidden while waiting and is restored on every exit
/// path. A tripped `cancel` token ends the wait with
/// [`RenderError::Cancelled`]; render failures are returned as-is.
pub fn show_info_box(
    writer: &ConsoleWriter,
    keys: &mut dyn KeySource,
    cancel: &CancelToken,
    ctx: &RenderContext<'_>,
    text: &str,
    options: &InfoBoxOptions,
) -> Result<KeyPress, RenderError> {
    let output = try_render_info_box(ctx, text, options)?;
    let _cursor = writer.hide_cursor()?;
    writer.write(&output)?;
    keys.wait_key(cancel)
}
