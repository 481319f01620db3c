//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequence for colors:
//! - Reset (0)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Default foreground/background (39, 49)
//! - Extended colors - 256-color mode (38;5;n, 48;5;n)
//! - Extended colors - RGB mode (38;2;r;g;b, 48;2;r;g;b)
//! - Bright foreground/background colors (90-97, 100-107)
//!
//! Text attributes (bold, underline, ...) are accepted and dropped.

use crate::style::Color;

use super::super::types::CellStyle;

const BASIC: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

const BRIGHT: [Color; 8] = [
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

/// Apply an SGR parameter list to `style`.
pub fn apply_sgr(params: &[u16], style: &mut CellStyle) {
    if params.is_empty() {
        *style = CellStyle::default();
        return;
    }

    let mut i = 0;
    while i < params.len() {
        let code = params[i];
        match code {
            0 => *style = CellStyle::default(),
            30..=37 => style.fg = BASIC[(code - 30) as usize],
            40..=47 => style.bg = BASIC[(code - 40) as usize],
            90..=97 => style.fg = BRIGHT[(code - 90) as usize],
            100..=107 => style.bg = BRIGHT[(code - 100) as usize],
            39 => style.fg = Color::Default,
            49 => style.bg = Color::Default,
            38 | 48 => {
                let (color, consumed) = extended(&params[i + 1..]);
                if let Some(color) = color {
                    if code == 38 {
                        style.fg = color;
                    } else {
                        style.bg = color;
                    }
                }
                i += consumed;
            }
            _ => {}
        }
        i += 1;
    }
}

/// Parse the tail of a 38/48 sequence. Returns the color and how many
/// parameters it consumed.
fn extended(rest: &[u16]) -> (Option<Color>, usize) {
    match rest {
        [5, n, ..] => (u8::try_from(*n).ok().map(Color::Indexed), 2),
        [2, r, g, b, ..] => {
            let channel = |v: u16| u8::try_from(v).unwrap_or(u8::MAX);
            (Some(Color::Rgb(channel(*r), channel(*g), channel(*b))), 4)
        }
        [5] => (None, 1),
        [2, ..] => (None, rest.len()),
        _ => (None, 0),
    }
}
