//! User configuration.
//!
//! Read from `<config_dir>/fancy/config.toml`. Every section and field is
//! optional; a missing file means the defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::FillStrategy;
use crate::style::{Color, ColorRole, FrameGlyphs, ProgressGlyphs, Theme};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub glyphs: GlyphConfig,
    pub progress: ProgressConfig,
    pub console: ConsoleConfig,
}

/// Theme preset plus per-role color overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: String,
    /// Role name (`progress`, `border`, ...) to color
    pub colors: BTreeMap<String, Color>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
            colors: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Preset name or eight glyphs: UL UR LL LR top bottom left right
    pub frame: String,
    pub progress_filled: char,
    pub vertical_filled: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            frame: "single".to_string(),
            progress_filled: ProgressGlyphs::horizontal().filled,
            vertical_filled: ProgressGlyphs::vertical().filled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Only show a full bar at exactly 100%
    pub targeted: bool,
}

/// Overrides for what the terminal reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dumb: Option<bool>,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("fancy").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        // Surface bad values at load time rather than at first render
        config.theme()?;
        config.frame_glyphs()?;
        Ok(config)
    }

    /// The preset theme with the configured overrides applied.
    pub fn theme(&self) -> Result<Theme> {
        let Some(mut theme) = Theme::by_name(&self.theme.preset) else {
            bail!(
                "Unknown theme preset '{}' (expected one of: {})",
                self.theme.preset,
                Theme::preset_names().join(", ")
            );
        };
        for (name, color) in &self.theme.colors {
            let Some(role) = ColorRole::from_name(name) else {
                bail!("Unknown color role '{}' in [theme.colors]", name);
            };
            theme = theme.with_color(role, *color);
        }
        Ok(theme)
    }

    pub fn frame_glyphs(&self) -> Result<FrameGlyphs> {
        self.glyphs
            .frame
            .parse()
            .with_context(|| format!("Invalid [glyphs] frame '{}'", self.glyphs.frame))
    }

    pub fn progress_glyphs(&self) -> ProgressGlyphs {
        ProgressGlyphs {
            filled: self.glyphs.progress_filled,
            ..ProgressGlyphs::horizontal()
        }
    }

    pub fn vertical_glyphs(&self) -> ProgressGlyphs {
        ProgressGlyphs {
            filled: self.glyphs.vertical_filled,
            ..ProgressGlyphs::vertical()
        }
    }

    pub fn fill_strategy(&self) -> FillStrategy {
        FillStrategy::from_targeted(self.progress.targeted)
    }
}
