//! Text-in-rule separators: `- Label -----------`.

use crate::style::{ColorPair, ColorRole};
use crate::text;

use super::{push_colors, push_repeat, push_reset, RenderContext};

const RULE: char = '-';
const PREFIX: &str = "- ";

/// Columns of the console kept free around the label.
const LABEL_MARGIN: usize = 6;

/// Options for [`render_separator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorOptions {
    /// Start the line with a `"- "` lead-in
    pub print_suffix: bool,
    /// Overrides the theme's separator text color
    pub colors: Option<ColorPair>,
}

impl Default for SeparatorOptions {
    fn default() -> Self {
        Self {
            print_suffix: true,
            colors: None,
        }
    }
}

/// Render a separator line sized to the console width.
///
/// Dashes leading `text` belong to the rule rather than the label. The
/// closing rule pads the line to `width - 1` columns, so an empty label gives
/// `width - 1` dashes. A dumb terminal gets the label without padding or
/// colors.
pub fn render_separator(ctx: &RenderContext<'_>, text: &str, options: &SeparatorOptions) -> String {
    let label = text.trim_start_matches(RULE);
    let leading = &text[..text.len() - label.len()];

    if ctx.dumb {
        if text.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(PREFIX.len() + text.len());
        if options.print_suffix {
            out.push_str(PREFIX);
        }
        out.push_str(leading);
        out.push_str(label);
        return out;
    }

    let rule_colors = ctx.theme.pair(ColorRole::Separator);
    let label_colors = options
        .colors
        .unwrap_or_else(|| ctx.theme.pair(ColorRole::SeparatorText));

    let mut out = String::with_capacity(ctx.width() * 2 + 48);
    let mut used = 0;
    if !text.is_empty() {
        push_colors(&mut out, rule_colors);
        if options.print_suffix {
            out.push_str(PREFIX);
            used += PREFIX.len();
        }
        out.push_str(leading);
        used += leading.len();

        let label = text::truncate(label, ctx.width().saturating_sub(LABEL_MARGIN));
        push_colors(&mut out, label_colors);
        out.push_str(label);
        out.push(' ');
        used += text::width(label) + 1;
    }

    push_colors(&mut out, rule_colors);
    push_repeat(&mut out, RULE, ctx.width().saturating_sub(used + 1));
    push_reset(&mut out);
    out
}
