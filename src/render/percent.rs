//! Percent-to-character-count strategies for progress bars.
//!
//! Both strategies map 0% to 0 and 100% to the full width, are monotone in
//! the percentage, and clamp out-of-range input. They differ in how partial
//! progress rounds.

/// Maps a percentage onto a number of filled cells.
pub trait PercentRepeat {
    /// Filled cells for `percent` (clamped to 0..=100) of `width` cells.
    fn filled(&self, percent: f64, width: usize) -> usize;
}

/// Round to the nearest cell, halves away from zero.
///
/// A bar may look full slightly before the work is complete
/// (99% of 10 cells fills all 10).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Proportional;

/// Round partial progress down and hit the exact width only at 100%.
///
/// A bar is full if and only if the work is complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Targeted;

/// Clamp to `0.0..=100.0`, mapping NaN to 0.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Exact share of `width` before rounding.
///
/// Multiplying first keeps integral percentages exact.
fn share(percent: f64, width: usize) -> f64 {
    clamp_percent(percent) * width as f64 / 100.0
}

impl PercentRepeat for Proportional {
    fn filled(&self, percent: f64, width: usize) -> usize {
        (share(percent, width).round() as usize).min(width)
    }
}

impl PercentRepeat for Targeted {
    fn filled(&self, percent: f64, width: usize) -> usize {
        if clamp_percent(percent) >= 100.0 {
            return width;
        }
        (share(percent, width).floor() as usize).min(width)
    }
}

/// Selectable strategy for option structs and configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillStrategy {
    #[default]
    Proportional,
    Targeted,
}

impl FillStrategy {
    pub fn from_targeted(targeted: bool) -> Self {
        if targeted {
            Self::Targeted
        } else {
            Self::Proportional
        }
    }
}

impl PercentRepeat for FillStrategy {
    fn filled(&self, percent: f64, width: usize) -> usize {
        match self {
            Self::Proportional => Proportional.filled(percent, width),
            Self::Targeted => Targeted.filled(percent, width),
        }
    }
}
