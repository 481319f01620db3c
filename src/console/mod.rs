//! Console collaborators: size and capability probing, the device writer,
//! and the blocking key wait.
//!
//! Renderers never talk to the console directly. They receive a
//! [`RenderContext`](crate::render::RenderContext) built from a snapshot of
//! a [`Console`], so one render call always sees consistent dimensions.

mod keys;
mod writer;

pub use keys::{CancelToken, CrosstermKeys, KeyPress, KeySource, ScriptedKeys};
pub use writer::{ConsoleWriter, CursorGuard};

/// Size used when the terminal cannot be queried (pipes, CI).
pub const FALLBACK_SIZE: ConsoleSize = ConsoleSize {
    width: 80,
    height: 24,
};

/// Console dimensions in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSize {
    pub width: usize,
    pub height: usize,
}

impl ConsoleSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Source of console dimensions and capabilities.
pub trait Console {
    /// Current console size. Queried, never cached.
    fn size(&self) -> ConsoleSize;

    /// Whether the active terminal cannot interpret escape sequences.
    fn is_dumb(&self) -> bool;
}

/// The process's real terminal.
///
/// Size comes from `terminal_size`; a terminal is dumb when `TERM` is unset
/// or `dumb`. Either can be overridden, which the CLI uses for `--cols`,
/// `--rows` and the config file.
#[derive(Debug, Clone, Default)]
pub struct SystemConsole {
    width: Option<usize>,
    height: Option<usize>,
    dumb: Option<bool>,
}

impl SystemConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width.or(self.width);
        self
    }

    pub fn with_height(mut self, height: Option<usize>) -> Self {
        self.height = height.or(self.height);
        self
    }

    pub fn with_dumb(mut self, dumb: Option<bool>) -> Self {
        self.dumb = dumb.or(self.dumb);
        self
    }
}

impl Console for SystemConsole {
    fn size(&self) -> ConsoleSize {
        let probed = terminal_size::terminal_size()
            .map(|(w, h)| ConsoleSize::new(w.0 as usize, h.0 as usize))
            .unwrap_or(FALLBACK_SIZE);
        ConsoleSize {
            width: self.width.unwrap_or(probed.width),
            height: self.height.unwrap_or(probed.height),
        }
    }

    fn is_dumb(&self) -> bool {
        self.dumb
            .unwrap_or_else(|| is_dumb_term(std::env::var("TERM").ok().as_deref()))
    }
}

/// Whether a `TERM` value names a terminal without escape support.
pub fn is_dumb_term(term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(t) => t.is_empty() || t == "dumb",
    }
}

/// A console with fixed dimensions, for tests and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConsole {
    pub size: ConsoleSize,
    pub dumb: bool,
}

impl FixedConsole {
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            size: ConsoleSize::new(width, height),
            dumb: false,
        }
    }

    pub const fn dumb(mut self) -> Self {
        self.dumb = true;
        self
    }
}

impl Console for FixedConsole {
    fn size(&self) -> ConsoleSize {
        self.size
    }

    fn is_dumb(&self) -> bool {
        self.dumb
    }
}
