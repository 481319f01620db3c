//! Frame and progress bar glyph tables.

use std::fmt;
use std::str::FromStr;

/// The eight characters that make up a rectangular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub upper_left: char,
    pub upper_right: char,
    pub lower_left: char,
    pub lower_right: char,
    pub upper_edge: char,
    pub lower_edge: char,
    pub left_edge: char,
    pub right_edge: char,
}

impl Default for FrameGlyphs {
    fn default() -> Self {
        Self::single()
    }
}

impl FrameGlyphs {
    /// Build from the eight glyphs in `UL UR LL LR top bottom left right` order.
    pub const fn from_array(g: [char; 8]) -> Self {
        Self {
            upper_left: g[0],
            upper_right: g[1],
            lower_left: g[2],
            lower_right: g[3],
            upper_edge: g[4],
            lower_edge: g[5],
            left_edge: g[6],
            right_edge: g[7],
        }
    }

    pub const fn single() -> Self {
        Self::from_array(['┌', '┐', '└', '┘', '─', '─', '│', '│'])
    }

    pub const fn double() -> Self {
        Self::from_array(['╔', '╗', '╚', '╝', '═', '═', '║', '║'])
    }

    pub const fn rounded() -> Self {
        Self::from_array(['╭', '╮', '╰', '╯', '─', '─', '│', '│'])
    }

    pub const fn ascii() -> Self {
        Self::from_array(['+', '+', '+', '+', '-', '-', '|', '|'])
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::single()),
            "double" => Some(Self::double()),
            "rounded" => Some(Self::rounded()),
            "ascii" => Some(Self::ascii()),
            _ => None,
        }
    }
}

/// Error returned when a frame glyph string is not exactly eight characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Frame glyphs must be 8 characters (UL UR LL LR top bottom left right), got {0}")]
pub struct ParseGlyphsError(pub usize);

impl FromStr for FrameGlyphs {
    type Err = ParseGlyphsError;

    /// Accepts a preset name or an 8-character glyph string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(preset) = Self::by_name(s) {
            return Ok(preset);
        }
        let chars: Vec<char> = s.chars().collect();
        let array: [char; 8] = chars
            .as_slice()
            .try_into()
            .map_err(|_| ParseGlyphsError(chars.len()))?;
        Ok(Self::from_array(array))
    }
}

impl fmt::Display for FrameGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in [
            self.upper_left,
            self.upper_right,
            self.lower_left,
            self.lower_right,
            self.upper_edge,
            self.lower_edge,
            self.left_edge,
            self.right_edge,
        ] {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Characters used for the filled and unfilled parts of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressGlyphs {
    pub filled: char,
    pub unfilled: char,
}

impl ProgressGlyphs {
    /// Horizontal bars fill with colored spaces.
    pub const fn horizontal() -> Self {
        Self {
            filled: ' ',
            unfilled: ' ',
        }
    }

    /// Vertical bars fill with asterisks.
    pub const fn vertical() -> Self {
        Self {
            filled: '*',
            unfilled: ' ',
        }
    }
}

impl Default for ProgressGlyphs {
    fn default() -> Self {
        Self::horizontal()
    }
}
