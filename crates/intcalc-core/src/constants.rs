//! Constants for interest calculation and process exit codes.

/// Scale factor for rounding to cents.
pub const CENTS_SCALE: f64 = 100.0;

/// Divisor converting a percentage rate into a decimal rate.
pub const PERCENT: f64 = 100.0;

/// Most rows a growth schedule may hold.
pub const MAX_SCHEDULE_ENTRIES: usize = 1000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, serialization).
    pub const ERROR_GENERIC: i32 = 1;
    /// One of the inputs failed validation.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// The computed total does not fit in a finite `f64`.
    pub const ERROR_OVERFLOW: i32 = 3;
}
