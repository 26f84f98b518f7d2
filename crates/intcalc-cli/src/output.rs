//! CLI output formatting.

use std::fmt::Write as _;

use intcalc_core::frequency;
use intcalc_core::{CalculationInput, CalculationResult, Details, ScheduleEntry};

/// Format an amount as dollars and cents, e.g. `$1,102.50`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Insert thousand separators into a string of digits.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a compounding frequency, naming presets.
#[must_use]
pub fn format_frequency(n: f64) -> String {
    match frequency::name_for(n) {
        Some(name) => format!("{name} ({n}/yr)"),
        None => format!("{n}/yr"),
    }
}

/// Three-line summary matching the result panel: principal, interest, total.
#[must_use]
pub fn render_result(result: &CalculationResult) -> String {
    format!(
        "Principal: {}\nInterest:  {}\nTotal:     {}\n",
        format_currency(result.principal),
        format_currency(result.interest),
        format_currency(result.total),
    )
}

/// Echo of the inputs the result was computed from.
#[must_use]
pub fn render_input(input: &CalculationInput) -> String {
    format!(
        "Rate:      {}%\nTime:      {} years\nCompound:  {}\n",
        input.rate(),
        input.time(),
        format_frequency(input.compounding_frequency()),
    )
}

/// Effective annual rate and continuous-compounding limit, one per line.
#[must_use]
pub fn render_details(details: &Details) -> String {
    format!(
        "Effective annual rate: {:.2}%\nContinuous limit:      {}\n",
        details.effective_annual_rate,
        format_currency(details.continuous_limit),
    )
}

/// Table of balances per year.
#[must_use]
pub fn render_schedule(entries: &[ScheduleEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8}  {:>18}  {:>18}", "Year", "Balance", "Interest");
    let _ = writeln!(out, "{:-<48}", "");
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>8}  {:>18}  {:>18}",
            entry.year,
            format_currency(entry.balance),
            format_currency(entry.interest),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_basic() {
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(102.5), "$102.50");
        assert_eq!(format_currency(2209.43), "$2,209.43");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands("1000000"), "1,000,000");
        assert_eq!(group_thousands("42"), "42");
        assert_eq!(group_thousands("1234"), "1,234");
    }

    #[test]
    fn frequency_names() {
        assert_eq!(format_frequency(12.0), "monthly (12/yr)");
        assert_eq!(format_frequency(3.0), "3/yr");
    }

    #[test]
    fn result_panel() {
        let result = CalculationResult {
            principal: 2000.0,
            interest: 209.43,
            total: 2209.43,
        };
        let s = render_result(&result);
        assert!(s.contains("Principal: $2,000.00"));
        assert!(s.contains("Interest:  $209.43"));
        assert!(s.contains("Total:     $2,209.43"));
    }

    #[test]
    fn input_echo() {
        let input = CalculationInput::new(1000.0, 5.0, 2.0, 1.0).unwrap();
        let s = render_input(&input);
        assert!(s.contains("Rate:      5%"));
        assert!(s.contains("annually"));
    }

    #[test]
    fn schedule_table() {
        let entries = [
            ScheduleEntry {
                year: 1.0,
                balance: 1050.0,
                interest: 50.0,
            },
            ScheduleEntry {
                year: 2.0,
                balance: 1102.5,
                interest: 102.5,
            },
        ];
        let s = render_schedule(&entries);
        assert_eq!(s.lines().count(), 4);
        assert!(s.contains("$1,102.50"));
    }

    #[test]
    fn details_block() {
        let details = Details {
            continuous_limit: 1105.17,
            effective_annual_rate: 5.0,
        };
        let s = render_details(&details);
        assert!(s.contains("5.00%"));
        assert!(s.contains("$1,105.17"));
    }
}
