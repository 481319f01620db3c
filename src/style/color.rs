//! Colors and ANSI escape code conversion.
//!
//! Converts colors and color pairs to the SGR escape sequences that
//! prefix rendered text. The layout engine never interprets colors beyond
//! concatenating these sequences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// A terminal color: default, one of the 16 ANSI colors, a 256-color
/// palette index or a true-color RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

/// Foreground/background pair applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorPair {
    #[serde(default)]
    pub fg: Color,
    #[serde(default)]
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Pair with only a foreground color.
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::Default,
        }
    }

    /// Pair with only a background color.
    pub const fn bg(bg: Color) -> Self {
        Self {
            fg: Color::Default,
            bg,
        }
    }

    /// Append the escape codes for this pair to `buf`.
    ///
    /// Default colors emit their explicit reset codes (39/49) so a pair
    /// always fully replaces whatever was active before it.
    pub fn push_ansi(&self, buf: &mut String) {
        if !push_fg(self.fg, buf) {
            buf.push_str("\x1b[39m");
        }
        if !push_bg(self.bg, buf) {
            buf.push_str("\x1b[49m");
        }
    }

    /// The escape codes for this pair as a new string.
    pub fn to_ansi(&self) -> String {
        let mut buf = String::with_capacity(24);
        self.push_ansi(&mut buf);
        buf
    }
}

/// Convert a foreground color to its ANSI escape code.
///
/// # Arguments
/// * `color` - The color to convert
/// * `buf` - The output buffer to append to
///
/// # Returns
/// `true` if a code was appended, `false` if the color is default
pub fn push_fg(color: Color, buf: &mut String) -> bool {
    push_sgr(color, buf, 30, 90, 38)
}

/// Convert a background color to its ANSI escape code.
///
/// # Arguments
/// * `color` - The color to convert
/// * `buf` - The output buffer to append to
///
/// # Returns
/// `true` if a code was appended, `false` if the color is default
pub fn push_bg(color: Color, buf: &mut String) -> bool {
    push_sgr(color, buf, 40, 100, 48)
}

fn push_sgr(color: Color, buf: &mut String, base: u8, bright: u8, extended: u8) -> bool {
    let code = match color {
        Color::Default => return false,
        Color::Indexed(n) => {
            buf.push_str(&format!("\x1b[{};5;{}m", extended, n));
            return true;
        }
        Color::Rgb(r, g, b) => {
            buf.push_str(&format!("\x1b[{};2;{};{};{}m", extended, r, g, b));
            return true;
        }
        Color::Black => base,
        Color::Red => base + 1,
        Color::Green => base + 2,
        Color::Yellow => base + 3,
        Color::Blue => base + 4,
        Color::Magenta => base + 5,
        Color::Cyan => base + 6,
        Color::White => base + 7,
        Color::BrightBlack => bright,
        Color::BrightRed => bright + 1,
        Color::BrightGreen => bright + 2,
        Color::BrightYellow => bright + 3,
        Color::BrightBlue => bright + 4,
        Color::BrightMagenta => bright + 5,
        Color::BrightCyan => bright + 6,
        Color::BrightWhite => bright + 7,
    };
    buf.push_str("\x1b[");
    buf.push_str(&code.to_string());
    buf.push('m');
    true
}

const NAMED: &[(&str, Color)] = &[
    ("default", Color::Default),
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("bright_black", Color::BrightBlack),
    ("bright_red", Color::BrightRed),
    ("bright_green", Color::BrightGreen),
    ("bright_yellow", Color::BrightYellow),
    ("bright_blue", Color::BrightBlue),
    ("bright_magenta", Color::BrightMagenta),
    ("bright_cyan", Color::BrightCyan),
    ("bright_white", Color::BrightWhite),
];

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color '{0}': expected a name, a 0-255 palette index or #rrggbb")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        if let Some((_, color)) = NAMED.iter().find(|(name, _)| *name == normalized) {
            return Ok(*color);
        }
        // "grey"/"gray" are common aliases for the dim white pair
        match normalized.as_str() {
            "gray" | "grey" => return Ok(Color::White),
            "dark_gray" | "dark_grey" => return Ok(Color::BrightBlack),
            _ => {}
        }
        if let Some(hex) = normalized.strip_prefix('#') {
            if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                    return Ok(Color::Rgb(r, g, b));
                }
            }
            return Err(ParseColorError(s.to_string()));
        }
        normalized
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Indexed(n) => write!(f, "{}", n),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            named => {
                let name = NAMED
                    .iter()
                    .find(|(_, c)| c == named)
                    .map(|(name, _)| *name)
                    .unwrap_or("default");
                f.write_str(name)
            }
        }
    }
}
