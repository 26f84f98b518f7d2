//! Application entry point and dispatch.

use anyhow::Result;
use tracing::debug;

use intcalc_cli::{CLIResultPresenter, JsonResultPresenter};
use intcalc_core::{CalculationInput, CompoundInterestCalculator, Report, ResultPresenter};

use crate::config::{AppConfig, OutputFormat};

/// Run the application.
///
/// Calculation failures are shown through the selected presenter before
/// being returned, so callers only need to map them to an exit code.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        intcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter: Box<dyn ResultPresenter> = match config.format {
        OutputFormat::Text => Box::new(CLIResultPresenter::new(config.quiet)),
        OutputFormat::Json => Box::new(JsonResultPresenter::new()),
    };

    run_calculation(config, presenter.as_ref())
}

fn run_calculation(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    let calculator = CompoundInterestCalculator::from_options(&config.options());

    let report = CalculationInput::parse(
        config.principal.as_deref().unwrap_or_default(),
        config.rate.as_deref().unwrap_or_default(),
        config.time.as_deref().unwrap_or_default(),
        &config.compound,
    )
    .and_then(|input| Report::build(&calculator, input, config.details, config.schedule));

    match report {
        Ok(report) => {
            debug!(total = report.result.total, "presenting result");
            presenter.present_result(&report)?;
            Ok(())
        }
        Err(err) => {
            debug!(field = ?err.field(), "calculation rejected: {err}");
            presenter.present_error(&err);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use intcalc_core::CalcError;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("intcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn run_valid_quiet() {
        let cfg = config(&["-p", "1000", "-r", "5", "-t", "2", "-n", "1", "-q"]);
        assert!(run(&cfg).is_ok());
    }

    #[test]
    fn run_invalid_returns_calc_error() {
        let cfg = config(&["-p", "1000", "-r", "5", "-t", "0"]);
        let err = run(&cfg).unwrap_err();
        assert_eq!(err.downcast_ref::<CalcError>(), Some(&CalcError::InvalidTime));
    }

    #[test]
    fn run_json_with_schedule() {
        let cfg = config(&[
            "-p", "2000", "-r", "10", "-t", "3", "--format", "json", "-s", "-d",
        ]);
        assert!(run(&cfg).is_ok());
    }

    #[test]
    fn run_completion() {
        let cfg = config(&["--completion", "zsh"]);
        assert!(run(&cfg).is_ok());
    }
}
