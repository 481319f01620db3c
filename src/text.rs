//! Display-width aware text helpers: measuring, truncating and word wrapping.
//!
//! Widths are terminal columns, not bytes or chars, so wide CJK glyphs and
//! emoji count as two columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns.
#[inline]
pub fn width(text: &str) -> usize {
    text.width()
}

/// Cut `text` so that its display width is at most `max` columns.
///
/// Wide characters that would straddle the limit are dropped entirely.
pub fn truncate(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Word-wrap `text` to lines of at most `max` columns.
///
/// Explicit newlines start new lines, runs of whitespace collapse to one
/// space, and words wider than `max` are split across lines. An empty input
/// produces no lines; an empty paragraph produces an empty line.
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = width(word);

            if current_width > 0 && current_width + 1 + word_width <= max {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-split words that can never fit
                let mut rest = word;
                while width(rest) > max {
                    let head = truncate(rest, max);
                    // A single glyph wider than max still has to go somewhere
                    let head = if head.is_empty() {
                        let first = rest.chars().next().map(char::len_utf8).unwrap_or(0);
                        &rest[..first]
                    } else {
                        head
                    };
                    lines.push(head.to_string());
                    rest = &rest[head.len()..];
                }
                current.push_str(rest);
                current_width = width(rest);
            }
        }

        lines.push(current);
    }

    lines
}
