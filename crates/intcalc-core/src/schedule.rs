//! Year-by-year growth schedule.

use serde::{Deserialize, Serialize};

use crate::calculator::{CalcError, CalculationResult, Calculator};
use crate::constants::MAX_SCHEDULE_ENTRIES;
use crate::input::CalculationInput;

/// Balance at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Elapsed years.
    pub year: f64,
    /// Balance after `year` years, rounded to cents.
    pub balance: f64,
    /// Interest accumulated so far, rounded to cents.
    pub interest: f64,
}

impl ScheduleEntry {
    fn from_result(year: f64, result: CalculationResult) -> Self {
        Self {
            year,
            balance: result.total,
            interest: result.interest,
        }
    }
}

/// Balances at the end of each whole year, plus one at `time` when it is
/// fractional. The last entry always matches the full calculation.
///
/// Fails with [`CalcError::ScheduleTooLong`] when more than
/// [`MAX_SCHEDULE_ENTRIES`] rows would be needed.
#[allow(clippy::cast_precision_loss)]
pub fn growth_schedule(
    calc: &dyn Calculator,
    input: &CalculationInput,
) -> Result<Vec<ScheduleEntry>, CalcError> {
    let time = input.time();
    if time.ceil() > MAX_SCHEDULE_ENTRIES as f64 {
        return Err(CalcError::ScheduleTooLong);
    }
    let mut entries = Vec::new();

    let mut year = 1.0;
    while year < time {
        let result = calc.calculate(&input.with_time(year))?;
        entries.push(ScheduleEntry::from_result(year, result));
        year += 1.0;
    }

    let result = calc.calculate(input)?;
    entries.push(ScheduleEntry::from_result(time, result));
    Ok(entries)
}
