//! Border and box frame rendering.
//!
//! A frame is anchored at its upper-left corner `(left, top)` and encloses
//! an interior of `width × height` cells, so it occupies
//! `(width + 2) × (height + 2)` cells in total.

use crate::error::{or_empty, RenderError};
use crate::style::{ColorPair, ColorRole, FrameGlyphs};

use super::{move_to, push_colors, push_repeat, push_reset, RenderContext};

/// Exterior anchor plus interior content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    pub const fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Column of the right edge.
    fn right(&self) -> Option<usize> {
        self.left.checked_add(self.width)?.checked_add(1)
    }

    /// Row of the bottom edge.
    fn bottom(&self) -> Option<usize> {
        self.top.checked_add(self.height)?.checked_add(1)
    }

    /// Right and bottom edges, provided both stay addressable once made
    /// 1-based.
    fn check(&self, operation: &'static str) -> Result<(usize, usize), RenderError> {
        let right = self.right().filter(|r| r.checked_add(1).is_some());
        let bottom = self.bottom().filter(|b| b.checked_add(1).is_some());
        match (right, bottom) {
            (Some(right), Some(bottom)) => Ok((right, bottom)),
            _ => Err(RenderError::failure(
                operation,
                format!("{:?}", self),
                "geometry overflows the coordinate space",
            )),
        }
    }
}

/// Options for [`render_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOptions {
    pub glyphs: FrameGlyphs,
    /// Overrides the theme's border color
    pub colors: Option<ColorPair>,
}

/// Options for [`render_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxOptions {
    pub frame: FrameOptions,
    /// Overrides the theme's box background
    pub fill: Option<ColorPair>,
}

/// Render a frame. See [`try_render_frame`].
pub fn render_frame(ctx: &RenderContext<'_>, geometry: Geometry, options: &FrameOptions) -> String {
    or_empty("render_frame", try_render_frame(ctx, geometry, options))
}

/// Render the four corners and edges of a rectangle.
///
/// Emits one cursor directive for the top edge, two per interior row (left
/// and right edge) and one for the bottom edge.
pub fn try_render_frame(
    ctx: &RenderContext<'_>,
    geometry: Geometry,
    options: &FrameOptions,
) -> Result<String, RenderError> {
    let (right, bottom) = geometry.check("render_frame")?;
    let g = &options.glyphs;
    let colors = options
        .colors
        .unwrap_or_else(|| ctx.theme.pair(ColorRole::Border));

    let mut out = String::with_capacity((geometry.width + 16) * (geometry.height + 2));
    push_colors(&mut out, colors);

    move_to(&mut out, geometry.left, geometry.top);
    out.push(g.upper_left);
    push_repeat(&mut out, g.upper_edge, geometry.width);
    out.push(g.upper_right);

    for row in geometry.top + 1..bottom {
        move_to(&mut out, geometry.left, row);
        out.push(g.left_edge);
        move_to(&mut out, right, row);
        out.push(g.right_edge);
    }

    move_to(&mut out, geometry.left, bottom);
    out.push(g.lower_left);
    push_repeat(&mut out, g.lower_edge, geometry.width);
    out.push(g.lower_right);

    push_reset(&mut out);
    Ok(out)
}

/// Paint a box interior. See [`try_render_box_fill`].
pub fn render_box_fill(ctx: &RenderContext<'_>, geometry: Geometry, fill: Option<ColorPair>) -> String {
    or_empty("render_box_fill", try_render_box_fill(ctx, geometry, fill))
}

/// Paint the interior of a box with spaces in the fill color.
///
/// Used to lay a background down before overlaying text.
pub fn try_render_box_fill(
    ctx: &RenderContext<'_>,
    geometry: Geometry,
    fill: Option<ColorPair>,
) -> Result<String, RenderError> {
    geometry.check("render_box_fill")?;
    let fill = fill.unwrap_or_else(|| ctx.theme.fill(ColorRole::BoxBackground));
    let mut out = String::with_capacity((geometry.width + 12) * geometry.height);
    push_colors(&mut out, fill);
    for i in 1..=geometry.height {
        move_to(&mut out, geometry.left + 1, geometry.top + i);
        push_repeat(&mut out, ' ', geometry.width);
    }
    push_reset(&mut out);
    Ok(out)
}

/// Render a filled box. See [`try_render_box`].
pub fn render_box(ctx: &RenderContext<'_>, geometry: Geometry, options: &BoxOptions) -> String {
    or_empty("render_box", try_render_box(ctx, geometry, options))
}

/// Render a box: interior fill followed by its frame.
pub fn try_render_box(
    ctx: &RenderContext<'_>,
    geometry: Geometry,
    options: &BoxOptions,
) -> Result<String, RenderError> {
    let mut out = try_render_box_fill(ctx, geometry, options.fill)?;
    out.push_str(&try_render_frame(ctx, geometry, &options.frame)?);
    Ok(out)
}
