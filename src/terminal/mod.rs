//! Virtual terminal screen.
//!
//! Replays rendered escape streams onto an in-memory grid so layouts can be
//! inspected as plain text. The test suites use it to check what a renderer
//! actually draws, and the CLI uses it for `--preview`.
//!
//! Only the subset of VT sequences the renderers emit is interpreted:
//! cursor positioning and movement, SGR colors, CR/LF/BS. Everything else
//! is ignored.

mod handlers;
mod screen;
mod types;

#[cfg(test)]
mod tests;

pub use screen::Screen;
pub use types::{Cell, CellStyle};
