//! Fancy console writer.
//!
//! Renders frames, boxes, centered and figlet text, tables, progress bars
//! and separators as strings of characters interleaved with ANSI/VT cursor
//! positioning and color sequences.
//!
//! ```no_run
//! use fancy::console::{ConsoleWriter, SystemConsole};
//! use fancy::render::{render_progress, ProgressOptions, RenderContext};
//! use fancy::style::Theme;
//!
//! let theme = Theme::default();
//! let ctx = RenderContext::from_console(&SystemConsole::new(), &theme);
//! let bar = render_progress(&ctx, 42.0, &ProgressOptions::default());
//! ConsoleWriter::stdout().write(&bar).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text;

pub use config::Config;
pub use error::RenderError;
