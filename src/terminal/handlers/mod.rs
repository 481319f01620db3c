//! Terminal escape sequence handlers.
//!
//! Organized by category:
//! - cursor: Cursor movement and positioning
//! - style: SGR (Select Graphic Rendition) handling

pub mod cursor;
pub mod style;

/// Flatten CSI parameters into plain values.
///
/// Colon sub-parameters are treated like semicolon-separated ones.
pub fn flatten(params: &vte::Params) -> Vec<u16> {
    params.iter().flat_map(|p| p.iter().copied()).collect()
}
