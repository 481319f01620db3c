//! Terminal data types.
//!
//! - CellStyle: foreground/background colors of a cell
//! - Cell: a single character with its style

use crate::style::Color;

/// Colors applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
}

/// A single screen cell.
///
/// The right half of a wide character holds `'\0'` so that every cell maps
/// to exactly one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub(crate) const CONTINUATION: char = '\0';

    pub fn is_continuation(&self) -> bool {
        self.ch == Self::CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}
