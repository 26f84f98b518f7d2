//! Typed calculation input and its parse-and-validate step.
//!
//! Every path into the calculator goes through [`CalculationInput`], so
//! validation happens in exactly one place. Fields are checked in a fixed
//! order (principal, rate, time, compounding frequency) and the first
//! violation wins.

use std::fmt;

use serde::Serialize;

use crate::calculator::CalcError;

/// Which input a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Initial amount.
    Principal,
    /// Annual rate in percent.
    Rate,
    /// Duration in years.
    Time,
    /// Compounding periods per year.
    Compound,
}

impl Field {
    /// Name of the field as it appears on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::Rate => "rate",
            Self::Time => "time",
            Self::Compound => "compound",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated set of calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    principal: f64,
    rate: f64,
    time: f64,
    compounding_frequency: f64,
}

impl CalculationInput {
    /// Validate numeric inputs.
    ///
    /// `rate` is a percentage (5 means 5%), `time` is in years and
    /// `compounding_frequency` is the number of periods per year.
    pub fn new(
        principal: f64,
        rate: f64,
        time: f64,
        compounding_frequency: f64,
    ) -> Result<Self, CalcError> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(CalcError::InvalidPrincipal);
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(CalcError::InvalidRate);
        }
        if !time.is_finite() || time <= 0.0 {
            return Err(CalcError::InvalidTime);
        }
        if !compounding_frequency.is_finite() || compounding_frequency <= 0.0 {
            return Err(CalcError::InvalidFrequency);
        }
        Ok(Self {
            principal,
            rate,
            time,
            compounding_frequency,
        })
    }

    /// Parse and validate raw text inputs.
    ///
    /// Empty or non-numeric text fails with the kind of the field it was
    /// given for. `compounding_frequency` also accepts a preset name such as
    /// `monthly` (see [`crate::frequency`]).
    pub fn parse(
        principal: &str,
        rate: &str,
        time: &str,
        compounding_frequency: &str,
    ) -> Result<Self, CalcError> {
        let principal = parse_number(principal).ok_or(CalcError::InvalidPrincipal)?;
        if !principal.is_finite() || principal <= 0.0 {
            return Err(CalcError::InvalidPrincipal);
        }
        let rate = parse_number(rate).ok_or(CalcError::InvalidRate)?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(CalcError::InvalidRate);
        }
        let time = parse_number(time).ok_or(CalcError::InvalidTime)?;
        if !time.is_finite() || time <= 0.0 {
            return Err(CalcError::InvalidTime);
        }
        let n = crate::frequency::parse_frequency(compounding_frequency)?;
        Self::new(principal, rate, time, n)
    }

    /// Initial amount.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Annual rate in percent.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annual rate as a decimal fraction.
    #[must_use]
    pub fn rate_decimal(&self) -> f64 {
        self.rate / crate::constants::PERCENT
    }

    /// Duration in years.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Compounding periods per year.
    #[must_use]
    pub fn compounding_frequency(&self) -> f64 {
        self.compounding_frequency
    }

    /// Same input with a different duration.
    pub(crate) fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }
}

/// Parse a trimmed decimal number. Empty text is not a number.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
