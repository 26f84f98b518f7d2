//! Error handling and exit codes.

use intcalc_core::constants::exit_codes;
use intcalc_core::CalcError;

/// Exit code for a calculation error.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::InvalidPrincipal
        | CalcError::InvalidRate
        | CalcError::InvalidTime
        | CalcError::InvalidFrequency => exit_codes::ERROR_INVALID_INPUT,
        CalcError::ScheduleTooLong => exit_codes::ERROR_INVALID_INPUT,
        CalcError::Overflow => exit_codes::ERROR_OVERFLOW,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
