//! Figlet fonts.
//!
//! `StandardFont` and `FileFont` go through figlet-rs; `SmallFont` is a
//! compact three-row font compiled into the crate so the centering fallback
//! always has a smaller font to try.

use std::fmt;
use std::path::{Path, PathBuf};

use figlet_rs::FIGfont;

use crate::error::RenderError;
use crate::text;

/// Rendered figlet art with its measured size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigletArt {
    pub lines: Vec<String>,
    /// Widest line, in columns
    pub width: usize,
    /// Number of lines
    pub height: usize,
}

impl FigletArt {
    /// Measure art from its lines. Trailing blanks on each line are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.as_ref().trim_end().to_string())
            .collect();
        let width = lines.iter().map(|l| text::width(l)).max().unwrap_or(0);
        let height = lines.len();
        Self {
            lines,
            width,
            height,
        }
    }

    /// Whether the art fits in a `width × height` area.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.width <= width && self.height <= height
    }
}

/// A font that turns text into figlet art.
pub trait FigletFont {
    fn name(&self) -> &str;

    /// Render `text`, or `None` when the font cannot render it.
    fn render(&self, text: &str) -> Option<FigletArt>;
}

/// Render with figlet-rs, swapping hardblanks for spaces.
fn convert(font: &FIGfont, hardblank: char, text: &str) -> Option<FigletArt> {
    let figure = font.convert(text)?;
    let rendered = figure.to_string().replace(hardblank, " ");
    let art = FigletArt::from_lines(rendered.lines());
    if art.height == 0 {
        None
    } else {
        Some(art)
    }
}

/// The standard figlet font bundled with figlet-rs.
pub struct StandardFont {
    font: FIGfont,
}

impl StandardFont {
    pub fn new() -> Result<Self, RenderError> {
        let font = FIGfont::standard()
            .map_err(|e| RenderError::failure("load_font", "standard", e))?;
        Ok(Self { font })
    }
}

impl FigletFont for StandardFont {
    fn name(&self) -> &str {
        "standard"
    }

    fn render(&self, text: &str) -> Option<FigletArt> {
        convert(&self.font, '$', text)
    }
}

impl fmt::Debug for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardFont").finish_non_exhaustive()
    }
}

/// A font loaded from a `.flf` file.
pub struct FileFont {
    path: PathBuf,
    name: String,
    hardblank: char,
    font: FIGfont,
}

impl FileFont {
    pub fn open(path: &Path) -> Result<Self, RenderError> {
        let context = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::failure("load_font", context.clone(), e.to_string()))?;
        let hardblank = hardblank_of(&content).ok_or_else(|| {
            RenderError::failure("load_font", context.clone(), "missing flf2a header")
        })?;
        let font = FIGfont::from_content(&content)
            .map_err(|e| RenderError::failure("load_font", context, e))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            hardblank,
            font,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The hardblank is the character right after the `flf2a` signature.
fn hardblank_of(content: &str) -> Option<char> {
    content.lines().next()?.strip_prefix("flf2a")?.chars().next()
}

impl FigletFont for FileFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, text: &str) -> Option<FigletArt> {
        convert(&self.font, self.hardblank, text)
    }
}

impl fmt::Debug for FileFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileFont")
            .field("path", &self.path)
            .field("hardblank", &self.hardblank)
            .finish_non_exhaustive()
    }
}

/// Built-in compact font, three rows tall.
///
/// Letters render upper-case; characters without a glyph render as `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallFont;

/// Rows of one glyph. All rows of a glyph have the same width.
type Glyph = [&'static str; 3];

const SMALL_GLYPHS: &[(char, Glyph)] = &[
    ('A', [" _ ", "|_|", "| |"]),
    ('B', [" _ ", "|_)", "|_)"]),
    ('C', [" _ ", "/  ", r"\_ "]),
    ('D', [" _ ", r"| \", "|_/"]),
    ('E', [" _ ", "|_ ", "|_ "]),
    ('F', [" _ ", "|_ ", "|  "]),
    ('G', [" __", "/__", r"\_|"]),
    ('H', ["   ", "|_|", "| |"]),
    ('I', ["___", " | ", "_|_"]),
    ('J', ["   ", "  |", r"\_|"]),
    ('K', ["  ", "|/", r"|\"]),
    ('L', ["  ", "| ", "|_"]),
    ('M', ["    ", r"|\/|", "|  |"]),
    ('N', ["    ", r"|\ |", r"| \|"]),
    ('O', [" _ ", r"/ \", r"\_/"]),
    ('P', [" _ ", "|_)", "|  "]),
    ('Q', [" _ ", r"/ \", r"\_X"]),
    ('R', [" _ ", "|_)", r"| \"]),
    ('S', [" __", "(_ ", "__)"]),
    ('T', ["___", " | ", " | "]),
    ('U', ["   ", "| |", "|_|"]),
    ('V', ["   ", r"\ /", " V "]),
    ('W', ["    ", "|  |", r"|/\|"]),
    ('X', ["  ", r"\/", r"/\"]),
    ('Y', ["   ", r"\_/", " | "]),
    ('Z', ["__ ", " / ", "/_ "]),
    ('0', [" _ ", "| |", "|_|"]),
    ('1', ["  ", "/|", " |"]),
    ('2', [" _ ", " _)", "/__"]),
    ('3', ["_ ", "_)", "_)"]),
    ('4', ["   ", "|_|", "  |"]),
    ('5', [" __", "|_ ", "__)"]),
    ('6', [" _ ", "|_ ", "|_)"]),
    ('7', ["__ ", "  /", " / "]),
    ('8', [" _ ", "(_)", "(_)"]),
    ('9', [" _ ", "(_|", "  |"]),
    (' ', ["  ", "  ", "  "]),
    ('.', [" ", " ", "o"]),
    (',', [" ", " ", "/"]),
    ('!', [" ", "|", "o"]),
    ('?', ["__ ", " _)", " o "]),
    ('-', ["  ", "__", "  "]),
    (':', [" ", "o", "o"]),
    ('_', ["   ", "   ", "___"]),
    ('\'', ["|", " ", " "]),
    ('/', ["  ", " /", "/ "]),
];

impl SmallFont {
    fn glyph(c: char) -> &'static Glyph {
        let upper = c.to_ascii_uppercase();
        SMALL_GLYPHS
            .iter()
            .find(|(g, _)| *g == upper)
            .or_else(|| SMALL_GLYPHS.iter().find(|(g, _)| *g == '?'))
            .map(|(_, rows)| rows)
            .unwrap_or(&["?", "?", "?"])
    }
}

impl FigletFont for SmallFont {
    fn name(&self) -> &str {
        "small"
    }

    fn render(&self, text: &str) -> Option<FigletArt> {
        if text.is_empty() {
            return None;
        }
        let mut rows = [String::new(), String::new(), String::new()];
        for (i, c) in text.chars().enumerate() {
            let glyph = Self::glyph(c);
            for (row, part) in rows.iter_mut().zip(glyph.iter()) {
                if i > 0 {
                    row.push(' ');
                }
                row.push_str(part);
            }
        }
        Some(FigletArt::from_lines(rows))
    }
}
