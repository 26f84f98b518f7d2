//! CLI result presenters: human-readable text and JSON.

use std::io::{self, Write};

use serde_json::json;
use tracing::debug;

use intcalc_core::{CalcError, Report, ResultPresenter};

use crate::output::{render_details, render_input, render_result, render_schedule};
use crate::ui;

/// Human-readable presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Write a report to `out`.
    pub fn write_result(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        if self.quiet {
            writeln!(out, "{:.2}", report.result.total)?;
            return Ok(());
        }

        writeln!(out, "{}", ui::header("Compound Interest"))?;
        write!(out, "{}", render_input(&report.input))?;
        writeln!(out)?;
        write!(out, "{}", render_result(&report.result))?;

        if let Some(details) = &report.details {
            writeln!(out)?;
            write!(out, "{}", render_details(details))?;
        }

        if let Some(schedule) = &report.schedule {
            writeln!(out)?;
            write!(out, "{}", render_schedule(schedule))?;
        }

        Ok(())
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, report: &Report) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_result(&mut lock, report)
    }

    fn present_error(&self, error: &CalcError) {
        debug!(?error, "presenting calculation error");
        let field = error.field().map(|f| f.as_str());
        ui::print_error(field, &error.to_string());
    }
}

/// JSON presenter, one document per calculation.
#[derive(Default)]
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Write a report to `out` as pretty-printed JSON.
    pub fn write_result(&self, out: &mut dyn Write, report: &Report) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::other)?;
        writeln!(out)
    }

    /// JSON document describing a failure.
    #[must_use]
    pub fn error_document(error: &CalcError) -> serde_json::Value {
        json!({
            "error": {
                "field": error.field(),
                "message": error.to_string(),
            }
        })
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_result(&self, report: &Report) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_result(&mut lock, report)
    }

    fn present_error(&self, error: &CalcError) {
        eprintln!("{}", Self::error_document(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intcalc_core::{CalculationInput, CompoundInterestCalculator};

    fn report(details: bool, schedule: bool) -> Report {
        let input = CalculationInput::new(1000.0, 5.0, 2.0, 1.0).unwrap();
        Report::build(
            &CompoundInterestCalculator::default(),
            input,
            details,
            schedule,
        )
        .unwrap()
    }

    fn render_text(quiet: bool, report: &Report) -> String {
        let mut buf = Vec::new();
        CLIResultPresenter::new(quiet)
            .write_result(&mut buf, report)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_quiet_prints_total_only() {
        assert_eq!(render_text(true, &report(true, true)), "1102.50\n");
    }

    #[test]
    fn text_normal() {
        let s = render_text(false, &report(false, false));
        assert!(s.contains("Principal: $1,000.00"));
        assert!(s.contains("Interest:  $102.50"));
        assert!(s.contains("Total:     $1,102.50"));
        assert!(!s.contains("Continuous limit"));
        assert!(!s.contains("Year"));
    }

    #[test]
    fn text_with_details_and_schedule() {
        let s = render_text(false, &report(true, true));
        assert!(s.contains("Continuous limit"));
        assert!(s.contains("Year"));
        assert!(s.contains("$1,050.00"));
    }

    #[test]
    fn json_result() {
        let mut buf = Vec::new();
        JsonResultPresenter::new()
            .write_result(&mut buf, &report(false, true))
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["result"]["principal"], 1000.0);
        assert_eq!(value["result"]["interest"], 102.5);
        assert_eq!(value["result"]["total"], 1102.5);
        assert_eq!(value["schedule"].as_array().unwrap().len(), 2);
        assert!(value.get("details").is_none());
    }

    #[test]
    fn json_error_document() {
        let doc = JsonResultPresenter::error_document(&CalcError::InvalidTime);
        assert_eq!(doc["error"]["field"], "time");
        assert_eq!(
            doc["error"]["message"],
            "Time period must be a valid positive number"
        );
        let doc = JsonResultPresenter::error_document(&CalcError::Overflow);
        assert!(doc["error"]["field"].is_null());
    }

    #[test]
    fn present_error_does_not_panic() {
        CLIResultPresenter::new(false).present_error(&CalcError::InvalidRate);
        JsonResultPresenter::new().present_error(&CalcError::InvalidPrincipal);
    }
}
