//! In-memory screen driven by a `vte` parser.

use unicode_width::UnicodeWidthChar;
use vte::{Params, Parser, Perform};

use super::handlers::{cursor, flatten, style};
use super::types::{Cell, CellStyle};

/// A fixed-size grid that escape streams are replayed onto.
///
/// The cursor never wraps: printing past the right edge is clipped, and
/// positioning outside the grid is clamped to it.
pub struct Screen {
    grid: Grid,
    parser: Parser,
}

struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    col: usize,
    row: usize,
    style: CellStyle,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid {
                width,
                height,
                cells: vec![Cell::default(); width * height],
                col: 0,
                row: 0,
                style: CellStyle::default(),
            },
            parser: Parser::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Replay `output` onto the grid.
    pub fn feed(&mut self, output: &str) {
        self.parser.advance(&mut self.grid, output.as_bytes());
    }

    /// Cursor position as 0-based `(col, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.grid.col, self.grid.row)
    }

    /// Cell at 0-based `(col, row)`.
    ///
    /// # Panics
    /// Panics when the position is outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> &Cell {
        assert!(col < self.grid.width && row < self.grid.height, "cell out of bounds");
        &self.grid.cells[row * self.grid.width + col]
    }

    /// Character at 0-based `(col, row)`; blank outside the grid.
    pub fn char_at(&self, col: usize, row: usize) -> char {
        if col < self.grid.width && row < self.grid.height {
            self.cell(col, row).ch
        } else {
            ' '
        }
    }

    /// Text of one row with trailing blanks trimmed.
    pub fn line(&self, row: usize) -> String {
        if row >= self.grid.height {
            return String::new();
        }
        let start = row * self.grid.width;
        let text: String = self.grid.cells[start..start + self.grid.width]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect();
        text.trim_end().to_string()
    }

    /// All rows, trailing blank rows dropped.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = (0..self.grid.height).map(|row| self.line(row)).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// The whole screen as plain text.
    pub fn dump(&self) -> String {
        self.lines().join("\n")
    }
}

impl Grid {
    fn put(&mut self, ch: char) {
        let w = ch.width().unwrap_or(0);
        if w == 0 || self.row >= self.height || self.col + w > self.width {
            // Clipped, or a combining mark we do not model
            self.col = (self.col + w).min(self.width);
            return;
        }
        let idx = self.row * self.width + self.col;
        self.cells[idx] = Cell {
            ch,
            style: self.style,
        };
        if w == 2 {
            self.cells[idx + 1] = Cell {
                ch: Cell::CONTINUATION,
                style: self.style,
            };
        }
        self.col += w;
    }

    fn move_to(&mut self, col: usize, row: usize) {
        self.col = col.min(self.width.saturating_sub(1));
        self.row = row.min(self.height.saturating_sub(1));
    }
}

impl Perform for Grid {
    fn print(&mut self, c: char) {
        self.put(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.col = 0;
                self.row = (self.row + 1).min(self.height.saturating_sub(1));
            }
            b'\r' => self.col = 0,
            0x08 => self.col = self.col.saturating_sub(1),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        // Private modes such as ?25l (cursor visibility) do not affect the grid
        if !intermediates.is_empty() {
            return;
        }
        let values = flatten(params);
        if action == 'm' {
            style::apply_sgr(&values, &mut self.style);
        } else if let Some((col, row)) = cursor::apply(action, &values, self.col, self.row) {
            self.move_to(col, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn prints_at_cursor_positions() {
        let mut screen = Screen::new(10, 3);
        screen.feed("\x1b[2;3Hab\x1b[1;1Hz");
        assert_eq!(screen.line(0), "z");
        assert_eq!(screen.line(1), "  ab");
        assert_eq!(screen.cursor(), (1, 0));
    }

    #[test]
    fn tracks_colors_per_cell() {
        let mut screen = Screen::new(4, 1);
        screen.feed("\x1b[31m\x1b[44mx\x1b[0my");
        assert_eq!(screen.cell(0, 0).style.fg, Color::Red);
        assert_eq!(screen.cell(0, 0).style.bg, Color::Blue);
        assert_eq!(screen.cell(1, 0).style, CellStyle::default());
    }

    #[test]
    fn clips_at_right_edge_without_wrapping() {
        let mut screen = Screen::new(3, 2);
        screen.feed("abcdef");
        assert_eq!(screen.dump(), "abc");
    }

    #[test]
    fn newline_moves_to_start_of_next_row() {
        let mut screen = Screen::new(5, 3);
        screen.feed("ab\ncd\r\nef");
        assert_eq!(screen.lines(), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn wide_characters_take_two_cells() {
        let mut screen = Screen::new(6, 1);
        screen.feed("日x");
        assert_eq!(screen.line(0), "日x");
        assert!(screen.cell(1, 0).is_continuation());
        assert_eq!(screen.char_at(2, 0), 'x');
    }

    #[test]
    fn positions_outside_grid_are_clamped() {
        let mut screen = Screen::new(4, 2);
        screen.feed("\x1b[99;99H!");
        assert_eq!(screen.char_at(3, 1), '!');
    }

    #[test]
    fn private_modes_are_ignored() {
        let mut screen = Screen::new(4, 1);
        screen.feed("\x1b[?25lok\x1b[?25h");
        assert_eq!(screen.line(0), "ok");
    }

    #[test]
    fn trailing_blank_rows_are_dropped_from_dump() {
        let mut screen = Screen::new(4, 5);
        screen.feed("\x1b[2;1Hhi");
        assert_eq!(screen.dump(), "\nhi");
    }
}
