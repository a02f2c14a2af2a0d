//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckConfig, CheckResult, Verdict, run_check};
pub use simple::{Console, run_simple};
