//! Table layout.
//!
//! Columns share the console width evenly. Each band (header, separator,
//! data row) occupies one console row starting at `top`.

use crate::error::{or_empty, RenderError};
use crate::style::{ColorPair, ColorRole};
use crate::text;

use super::{check_area, move_to, push_colors, push_repeat, push_reset, RenderContext};

const SEPARATOR: char = '═';

/// Gutter kept at the right of each cell, on top of the margin.
const CELL_GUTTER: usize = 3;

/// Color override for a single data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOption {
    /// 0-based data row (the header is not counted)
    pub row: usize,
    pub column: usize,
    pub colors: ColorPair,
}

/// Options for [`render_table`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableOptions {
    /// Columns left blank on both sides
    pub margin: usize,
    /// Row of the header band
    pub top: usize,
    /// Draw a separator line after every data row too
    pub separate_rows: bool,
    pub cell_options: Vec<CellOption>,
    pub header_colors: Option<ColorPair>,
    pub value_colors: Option<ColorPair>,
    pub separator_colors: Option<ColorPair>,
}

impl TableOptions {
    /// Colors for the data cell at `(row, column)`; first matching override wins.
    fn cell_colors(&self, row: usize, column: usize, default: ColorPair) -> ColorPair {
        self.cell_options
            .iter()
            .find(|o| o.row == row && o.column == column)
            .map(|o| o.colors)
            .unwrap_or(default)
    }
}

/// Column start positions for `count` columns on a `width` wide console.
///
/// Positions walk from `margin` in steps of `round(width / count)` and stop
/// at `count` columns or at the console edge, whichever comes first. They
/// are strictly increasing and all lie inside the console.
pub fn column_positions(width: usize, count: usize, margin: usize) -> Vec<usize> {
    let step = column_width(width, count);
    (0..count)
        .map(|i| margin.saturating_add(step.saturating_mul(i)))
        .take_while(|&p| p < width)
        .collect()
}

fn column_width(width: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    ((width as f64 / count as f64).round() as usize).max(1)
}

/// Render a table. See [`try_render_table`].
pub fn render_table<S: AsRef<str>>(
    ctx: &RenderContext<'_>,
    headers: &[S],
    rows: &[Vec<S>],
    options: &TableOptions,
) -> String {
    or_empty("render_table", try_render_table(ctx, headers, rows, options))
}

/// Render a header band, a separator line and one band per data row.
///
/// Cells are cut to `column_width - 3 - margin` columns. Cells beyond the
/// last column that fits on the console are not drawn. A table without
/// headers has no column width and fails.
pub fn try_render_table<S: AsRef<str>>(
    ctx: &RenderContext<'_>,
    headers: &[S],
    rows: &[Vec<S>],
    options: &TableOptions,
) -> Result<String, RenderError> {
    if headers.is_empty() {
        return Err(RenderError::failure(
            "render_table",
            format!("{} rows", rows.len()),
            "table has no headers",
        ));
    }

    let width = ctx.width();
    let positions = column_positions(width, headers.len(), options.margin);
    if positions.len() < headers.len() {
        tracing::warn!(
            columns = headers.len(),
            visible = positions.len(),
            width,
            "table is wider than the console, dropping columns"
        );
    }
    let cell_width = column_width(width, headers.len())
        .saturating_sub(CELL_GUTTER)
        .saturating_sub(options.margin);

    let header_colors = options
        .header_colors
        .unwrap_or_else(|| ctx.theme.pair(ColorRole::TableHeader));
    let value_colors = options
        .value_colors
        .unwrap_or_else(|| ctx.theme.pair(ColorRole::TableValue));
    let separator_colors = options
        .separator_colors
        .unwrap_or_else(|| ctx.theme.pair(ColorRole::TableSeparator));
    let rule = width.saturating_sub(options.margin.saturating_mul(2));

    // Header and first separator, then one or two bands per row
    let per_row = if options.separate_rows { 2 } else { 1 };
    let bands = rows.len().saturating_mul(per_row).saturating_add(2);
    check_area("render_table", 0, options.top, width, bands)?;
    check_area("render_table", options.margin, options.top, 1, bands)?;

    let mut out = String::with_capacity((rows.len() + 2) * (width + 32));
    let mut y = options.top;

    push_colors(&mut out, header_colors);
    for (header, &x) in headers.iter().zip(&positions) {
        move_to(&mut out, x, y);
        out.push_str(text::truncate(header.as_ref(), cell_width));
    }
    y += 1;
    push_separator(&mut out, separator_colors, options.margin, y, rule);
    y += 1;

    for (r, row) in rows.iter().enumerate() {
        for (c, (cell, &x)) in row.iter().zip(&positions).enumerate() {
            push_colors(&mut out, options.cell_colors(r, c, value_colors));
            move_to(&mut out, x, y);
            out.push_str(text::truncate(cell.as_ref(), cell_width));
        }
        y += 1;
        if options.separate_rows {
            push_separator(&mut out, separator_colors, options.margin, y, rule);
            y += 1;
        }
    }

    push_reset(&mut out);
    Ok(out)
}

fn push_separator(out: &mut String, colors: ColorPair, left: usize, row: usize, len: usize) {
    push_colors(out, colors);
    move_to(out, left, row);
    push_repeat(out, SEPARATOR, len);
}
