//! Calculator trait, error type and the compound interest calculator.
//!
//! `Calculator` is the trait consumed by the application layer.
//! `CompoundInterestCalculator` applies `A = P(1 + r/n)^(n*t)` and rounds
//! the figures according to its [`RoundingMode`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CENTS_SCALE, PERCENT};
use crate::input::{CalculationInput, Field};
use crate::options::{round_cents, Options, RoundingMode};

/// Error type for interest calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Principal is missing, not a number, not finite, or not positive.
    #[error("Principal must be a valid positive number")]
    InvalidPrincipal,

    /// Rate is missing, not a number, not finite, or negative.
    #[error("Interest rate must be a valid non-negative number")]
    InvalidRate,

    /// Time is missing, not a number, not finite, or not positive.
    #[error("Time period must be a valid positive number")]
    InvalidTime,

    /// Compounding frequency is missing, unknown, not finite, or not positive.
    #[error("Compounding frequency must be a valid positive number")]
    InvalidFrequency,

    /// The inputs are valid but a reported figure does not fit in an `f64`.
    #[error("calculated value is too large to represent")]
    Overflow,

    /// The schedule would need more rows than allowed.
    #[error("schedule would exceed {max} yearly rows", max = crate::constants::MAX_SCHEDULE_ENTRIES)]
    ScheduleTooLong,
}

impl CalcError {
    /// The input field a validation failure refers to.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidPrincipal => Some(Field::Principal),
            Self::InvalidRate => Some(Field::Rate),
            Self::InvalidTime => Some(Field::Time),
            Self::InvalidFrequency => Some(Field::Compound),
            Self::Overflow | Self::ScheduleTooLong => None,
        }
    }
}

/// Rounded outcome of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Initial amount, rounded to cents.
    pub principal: f64,
    /// Interest earned, rounded to cents.
    pub interest: f64,
    /// Principal plus interest, rounded to cents.
    pub total: f64,
}

/// Public trait for interest calculators.
pub trait Calculator: Send + Sync {
    /// Calculate the result for an already validated input.
    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CalcError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Periodic compound interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterestCalculator {
    rounding: RoundingMode,
}

impl CompoundInterestCalculator {
    /// Create a calculator with the given rounding convention.
    #[must_use]
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Create a calculator from options.
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self::new(opts.rounding)
    }

    /// Rounding convention in use.
    #[must_use]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

impl Calculator for CompoundInterestCalculator {
    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CalcError> {
        let total = compound_total(input)?;
        let (principal, interest, total_rounded) = self.rounding.apply(input.principal(), total);

        debug!(
            calculator = self.name(),
            principal = input.principal(),
            rate = input.rate(),
            time = input.time(),
            n = input.compounding_frequency(),
            total,
            rounding = self.rounding.as_str(),
            "compound interest calculated"
        );

        Ok(CalculationResult {
            principal,
            interest,
            total: total_rounded,
        })
    }

    fn name(&self) -> &str {
        "CompoundInterest"
    }
}

/// Unrounded `P(1 + r/n)^(n*t)`.
pub(crate) fn compound_total(input: &CalculationInput) -> Result<f64, CalcError> {
    let n = input.compounding_frequency();
    let growth = (1.0 + input.rate_decimal() / n).powf(n * input.time());
    finite_in_cents(input.principal() * growth)
}

/// Unrounded `P * e^(r*t)`, the limit of the total as `n` grows.
pub fn continuous_limit(input: &CalculationInput) -> Result<f64, CalcError> {
    let limit = input.principal() * (input.rate_decimal() * input.time()).exp();
    finite_in_cents(limit)
}

/// Effective annual rate in percent, rounded to cents of a percent.
pub fn effective_annual_rate(input: &CalculationInput) -> Result<f64, CalcError> {
    let n = input.compounding_frequency();
    let ear = (1.0 + input.rate_decimal() / n).powf(n) - 1.0;
    finite_in_cents(ear * PERCENT).map(round_cents)
}

fn finite_in_cents(value: f64) -> Result<f64, CalcError> {
    if (value * CENTS_SCALE).is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}
