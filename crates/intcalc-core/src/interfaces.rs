//! Presentation interfaces.

use serde::Serialize;
use tracing::debug;

use crate::calculator::{
    continuous_limit, effective_annual_rate, CalcError, CalculationResult, Calculator,
};
use crate::input::CalculationInput;
use crate::options::round_cents;
use crate::schedule::{growth_schedule, ScheduleEntry};

/// Extra figures shown in detailed output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Details {
    /// Total under continuous compounding, rounded to cents.
    pub continuous_limit: f64,
    /// Effective annual rate in percent.
    pub effective_annual_rate: f64,
}

/// Everything a presenter may need for one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: CalculationInput,
    pub result: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleEntry>>,
}

impl Report {
    /// Run `calc` on `input`, optionally adding details and a schedule.
    pub fn build(
        calc: &dyn Calculator,
        input: CalculationInput,
        with_details: bool,
        with_schedule: bool,
    ) -> Result<Self, CalcError> {
        let result = calc.calculate(&input)?;
        debug!(calculator = calc.name(), with_details, with_schedule, "building report");
        let details = if with_details {
            Some(Details {
                continuous_limit: round_cents(continuous_limit(&input)?),
                effective_annual_rate: effective_annual_rate(&input)?,
            })
        } else {
            None
        };
        let schedule = if with_schedule {
            Some(growth_schedule(calc, &input)?)
        } else {
            None
        };
        Ok(Self {
            input,
            result,
            details,
            schedule,
        })
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful calculation.
    fn present_result(&self, report: &Report) -> std::io::Result<()>;

    /// Present a failed calculation.
    fn present_error(&self, error: &CalcError);
}
