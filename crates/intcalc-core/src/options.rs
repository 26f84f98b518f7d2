//! Calculation options and rounding conventions.

use serde::{Deserialize, Serialize};

use crate::constants::CENTS_SCALE;

/// How the reported interest relates to the reported principal and total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Principal, interest and total are each rounded on their own.
    /// `total - principal` may differ from `interest` by one cent.
    #[default]
    Independent,
    /// Interest is the difference of the rounded total and principal,
    /// so the three figures always add up.
    Derived,
}

impl RoundingMode {
    /// Round an unrounded `(principal, total)` pair into the reported
    /// `(principal, interest, total)` triple.
    #[must_use]
    pub fn apply(self, principal: f64, total: f64) -> (f64, f64, f64) {
        let p = round_cents(principal);
        let t = round_cents(total);
        let i = match self {
            Self::Independent => round_cents(total - principal),
            Self::Derived => round_cents(t - p),
        };
        (p, i, t)
    }

    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Derived => "derived",
        }
    }
}

/// Round to cents, halves away from zero.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    let rounded = (value * CENTS_SCALE).round() / CENTS_SCALE;
    // Normalise -0.0 so it never prints as "-0.00".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Options for interest calculation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Rounding convention for the reported figures.
    pub rounding: RoundingMode,
}
