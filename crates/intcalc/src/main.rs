//! intcalc — compound interest calculator.

use intcalc_core::CalcError;
use intcalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing; stdout is reserved for results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        // Calculation errors were already shown by the presenter.
        if err.downcast_ref::<CalcError>().is_none() {
            intcalc_cli::ui::print_error(None, &format!("{err:#}"));
        }
        std::process::exit(errors::exit_code(&err));
    }
}
