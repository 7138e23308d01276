//! Percentage value object (0-100 scale).

use std::fmt;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    /// Creates a Percentage in const context. Values above 100 are clamped.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    ///
    /// `rate / 100.0` is the nearest double to the decimal fraction, so
    /// 15% yields exactly the same `f64` as the literal `0.15`.
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `amount` scaled by this percentage.
    pub fn of(&self, amount: f64) -> f64 {
        amount * self.as_fraction()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
