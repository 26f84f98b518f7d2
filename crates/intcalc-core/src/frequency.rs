//! Named compounding frequencies.

use crate::calculator::CalcError;
use crate::input::parse_number;

/// Preset compounding frequencies, `(name, periods per year)`.
pub const PRESETS: [(&str, f64); 6] = [
    ("annually", 1.0),
    ("semiannually", 2.0),
    ("quarterly", 4.0),
    ("monthly", 12.0),
    ("weekly", 52.0),
    ("daily", 365.0),
];

/// Parse a compounding frequency given as a preset name or a number.
///
/// Names are matched case-insensitively. Numbers are returned as parsed;
/// range checks are left to [`crate::input::CalculationInput::new`].
pub fn parse_frequency(raw: &str) -> Result<f64, CalcError> {
    let trimmed = raw.trim();
    if let Some(&(_, n)) = PRESETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(n);
    }
    parse_number(trimmed).ok_or(CalcError::InvalidFrequency)
}

/// Preset name for a frequency, if it matches one exactly.
#[must_use]
pub fn name_for(n: f64) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|&&(_, value)| value == n)
        .map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_presets() {
        assert_eq!(parse_frequency("annually"), Ok(1.0));
        assert_eq!(parse_frequency("Monthly"), Ok(12.0));
        assert_eq!(parse_frequency(" DAILY "), Ok(365.0));
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_frequency("4"), Ok(4.0));
        assert_eq!(parse_frequency("0.5"), Ok(0.5));
        // Range is not checked here.
        assert_eq!(parse_frequency("0"), Ok(0.0));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(parse_frequency("hourly"), Err(CalcError::InvalidFrequency));
        assert_eq!(parse_frequency(""), Err(CalcError::InvalidFrequency));
    }

    #[test]
    fn names_round_trip() {
        for (name, n) in PRESETS {
            assert_eq!(name_for(n), Some(name));
        }
        assert_eq!(name_for(3.0), None);
    }
}
