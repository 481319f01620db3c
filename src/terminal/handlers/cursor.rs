//! Cursor movement handlers.
//!
//! Handles CSI sequences:
//! - A: Cursor up
//! - B: Cursor down
//! - C: Cursor forward
//! - D: Cursor back
//! - H/f: Cursor position
//! - G: Cursor horizontal absolute
//! - d: Cursor vertical absolute

/// 1-based CSI argument with the VT default of 1 for missing or zero values.
fn arg(params: &[u16], idx: usize) -> usize {
    match params.get(idx) {
        Some(&v) if v > 0 => v as usize,
        _ => 1,
    }
}

/// Apply a cursor CSI to a 0-based `(col, row)` cursor.
///
/// Returns `None` for actions this handler does not own. The result is not
/// clamped; the screen clamps to its own bounds.
pub fn apply(action: char, params: &[u16], col: usize, row: usize) -> Option<(usize, usize)> {
    let n = arg(params, 0);
    match action {
        'H' | 'f' => Some((arg(params, 1) - 1, n - 1)),
        'A' => Some((col, row.saturating_sub(n))),
        'B' => Some((col, row + n)),
        'C' => Some((col + n, row)),
        'D' => Some((col.saturating_sub(n), row)),
        'G' => Some((n - 1, row)),
        'd' => Some((col, n - 1)),
        _ => None,
    }
}
