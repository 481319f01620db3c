//! Colors, themes and glyph tables shared by all renderers.

pub mod color;
pub mod glyphs;
pub mod theme;

pub use color::{Color, ColorPair, ParseColorError, RESET};
pub use glyphs::{FrameGlyphs, ParseGlyphsError, ProgressGlyphs};
pub use theme::{ColorRole, Theme};
