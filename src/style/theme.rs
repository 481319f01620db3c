//! Theme configuration for rendered output
//!
//! Centralizes all color definitions for easy customization. Renderers ask
//! the theme for the color of a semantic role instead of hard-coding codes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorPair, RESET};

/// Semantic color roles consulted by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Plain text (centered text, info box body)
    NeutralText,
    /// Background behind everything
    Background,
    /// Separator rule dashes
    Separator,
    /// Separator label text
    SeparatorText,
    /// Filled part of progress bars
    Progress,
    /// Frame glyphs
    Border,
    /// Fill of boxes
    BoxBackground,
    /// Table header cells
    TableHeader,
    /// Table value cells
    TableValue,
    /// Table separator lines
    TableSeparator,
    /// Figlet art
    Figlet,
}

impl ColorRole {
    /// All roles, in declaration order.
    pub const ALL: [ColorRole; 11] = [
        ColorRole::NeutralText,
        ColorRole::Background,
        ColorRole::Separator,
        ColorRole::SeparatorText,
        ColorRole::Progress,
        ColorRole::Border,
        ColorRole::BoxBackground,
        ColorRole::TableHeader,
        ColorRole::TableValue,
        ColorRole::TableSeparator,
        ColorRole::Figlet,
    ];

    /// Name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::NeutralText => "neutral_text",
            ColorRole::Background => "background",
            ColorRole::Separator => "separator",
            ColorRole::SeparatorText => "separator_text",
            ColorRole::Progress => "progress",
            ColorRole::Border => "border",
            ColorRole::BoxBackground => "box_background",
            ColorRole::TableHeader => "table_header",
            ColorRole::TableValue => "table_value",
            ColorRole::TableSeparator => "table_separator",
            ColorRole::Figlet => "figlet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Theme configuration.
///
/// A role → color table. Roles missing from the table render with the
/// terminal default color.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    colors: HashMap<ColorRole, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    fn from_table(name: &str, table: &[(ColorRole, Color)]) -> Self {
        Self {
            name: name.to_string(),
            colors: table.iter().copied().collect(),
        }
    }

    /// Standard theme - light gray text with green accents.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn standard() -> Self {
        Self::from_table(
            "default",
            &[
                (ColorRole::NeutralText, Color::White),
                (ColorRole::Background, Color::Default),
                (ColorRole::Separator, Color::BrightBlack),
                (ColorRole::SeparatorText, Color::White),
                (ColorRole::Progress, Color::Green),
                (ColorRole::Border, Color::BrightBlack),
                (ColorRole::BoxBackground, Color::Default),
                (ColorRole::TableHeader, Color::Green),
                (ColorRole::TableValue, Color::White),
                (ColorRole::TableSeparator, Color::BrightBlack),
                (ColorRole::Figlet, Color::Green),
            ],
        )
    }

    /// Classic terminal theme - white text, yellow accents.
    pub fn classic() -> Self {
        Self::from_table(
            "classic",
            &[
                (ColorRole::NeutralText, Color::BrightWhite),
                (ColorRole::Background, Color::Default),
                (ColorRole::Separator, Color::Yellow),
                (ColorRole::SeparatorText, Color::BrightWhite),
                (ColorRole::Progress, Color::Yellow),
                (ColorRole::Border, Color::BrightWhite),
                (ColorRole::BoxBackground, Color::Blue),
                (ColorRole::TableHeader, Color::Yellow),
                (ColorRole::TableValue, Color::BrightWhite),
                (ColorRole::TableSeparator, Color::Yellow),
                (ColorRole::Figlet, Color::Yellow),
            ],
        )
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self::from_table(
            "ocean",
            &[
                (ColorRole::NeutralText, Color::Cyan),
                (ColorRole::Background, Color::Default),
                (ColorRole::Separator, Color::Blue),
                (ColorRole::SeparatorText, Color::BrightCyan),
                (ColorRole::Progress, Color::BrightCyan),
                (ColorRole::Border, Color::Blue),
                (ColorRole::BoxBackground, Color::Default),
                (ColorRole::TableHeader, Color::BrightCyan),
                (ColorRole::TableValue, Color::Cyan),
                (ColorRole::TableSeparator, Color::Blue),
                (ColorRole::Figlet, Color::BrightCyan),
            ],
        )
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "standard" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Names of the built-in presets.
    pub fn preset_names() -> &'static [&'static str] {
        &["default", "classic", "ocean"]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color for a role.
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(&role).copied().unwrap_or_default()
    }

    /// Replace the color of a role.
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.colors.insert(role, color);
        self
    }

    /// Foreground pair for a role, on the theme background.
    pub fn pair(&self, role: ColorRole) -> ColorPair {
        ColorPair::new(self.color(role), self.color(ColorRole::Background))
    }

    /// Background pair for a role (used for fills).
    pub fn fill(&self, role: ColorRole) -> ColorPair {
        ColorPair::new(self.color(ColorRole::NeutralText), self.color(role))
    }

    // ANSI helpers for plain CLI output

    /// Format text with a role color.
    pub fn paint(&self, role: ColorRole, text: &str) -> String {
        format!("{}{}{}", self.pair(role).to_ansi(), text, RESET)
    }
}
