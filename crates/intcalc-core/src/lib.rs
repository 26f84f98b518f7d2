//! # intcalc-core
//!
//! Core library for the intcalc compound interest calculator.
//! Validates inputs, applies `A = P(1 + r/n)^(n*t)` and rounds to cents.

pub mod calculator;
pub mod constants;
pub mod frequency;
pub mod input;
pub mod interfaces;
pub mod options;
pub mod schedule;

// Re-exports
pub use calculator::{
    continuous_limit, effective_annual_rate, CalcError, CalculationResult, Calculator,
    CompoundInterestCalculator,
};
pub use constants::exit_codes;
pub use input::{CalculationInput, Field};
pub use interfaces::{Details, Report, ResultPresenter};
pub use options::{round_cents, Options, RoundingMode};
pub use schedule::{growth_schedule, ScheduleEntry};

/// Compute compound interest with the default calculator.
///
/// `rate` is an annual percentage, `time` is in years and
/// `compounding_frequency` is the number of periods per year.
///
/// # Example
/// ```
/// let result = intcalc_core::calculate(1000.0, 5.0, 2.0, 1.0).unwrap();
/// assert_eq!(result.total, 1102.5);
/// assert_eq!(
///     intcalc_core::calculate(0.0, 5.0, 1.0, 1.0),
///     Err(intcalc_core::CalcError::InvalidPrincipal)
/// );
/// ```
pub fn calculate(
    principal: f64,
    rate: f64,
    time: f64,
    compounding_frequency: f64,
) -> Result<CalculationResult, CalcError> {
    let input = CalculationInput::new(principal, rate, time, compounding_frequency)?;
    CompoundInterestCalculator::default().calculate(&input)
}

/// Like [`calculate`], for raw text inputs.
pub fn calculate_str(
    principal: &str,
    rate: &str,
    time: &str,
    compounding_frequency: &str,
) -> Result<CalculationResult, CalcError> {
    let input = CalculationInput::parse(principal, rate, time, compounding_frequency)?;
    CompoundInterestCalculator::default().calculate(&input)
}
