//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use intcalc_core::{Options, RoundingMode};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Rounding convention for the reported interest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    /// Round principal, interest and total independently.
    #[default]
    Independent,
    /// Report interest as rounded total minus rounded principal.
    Derived,
}

impl From<RoundingArg> for RoundingMode {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Independent => Self::Independent,
            RoundingArg::Derived => Self::Derived,
        }
    }
}

/// intcalc — compound interest calculator.
///
/// Computes P(1 + r/n)^(n*t) and reports principal, interest and total
/// rounded to cents.
#[derive(Parser, Debug)]
#[command(name = "intcalc", version, about)]
pub struct AppConfig {
    /// Initial amount (must be positive).
    #[arg(
        short,
        long,
        env = "INTCALC_PRINCIPAL",
        required_unless_present = "completion",
        allow_hyphen_values = true
    )]
    pub principal: Option<String>,

    /// Annual interest rate in percent (5 means 5%).
    #[arg(
        short,
        long,
        env = "INTCALC_RATE",
        required_unless_present = "completion",
        allow_hyphen_values = true
    )]
    pub rate: Option<String>,

    /// Time period in years.
    #[arg(
        short,
        long,
        env = "INTCALC_TIME",
        required_unless_present = "completion",
        allow_hyphen_values = true
    )]
    pub time: Option<String>,

    /// Compounding frequency: periods per year, or annually, semiannually,
    /// quarterly, monthly, weekly, daily.
    #[arg(
        short = 'n',
        long,
        env = "INTCALC_COMPOUND",
        default_value = "monthly",
        allow_hyphen_values = true
    )]
    pub compound: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Rounding convention for the reported interest.
    #[arg(long, value_enum, default_value_t = RoundingArg::Independent)]
    pub rounding: RoundingArg,

    /// Quiet mode (only output the total).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show effective annual rate and continuous-compounding limit.
    #[arg(short, long)]
    pub details: bool,

    /// Show the balance at the end of each year.
    #[arg(short, long)]
    pub schedule: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            rounding: self.rounding.into(),
        }
    }
}
