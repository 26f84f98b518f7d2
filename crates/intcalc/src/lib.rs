//! intcalc library — application logic for the compound interest calculator.

pub mod app;
pub mod config;
pub mod errors;
