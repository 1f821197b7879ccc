//! Command implementations

pub mod audit;
pub mod check;
pub mod runner;
pub mod simple;

pub use audit::{AuditReport, AuditViolation, check_pair, run_audit};
pub use check::{CheckError, CheckResult, check_guess};
pub use runner::{RunResult, SimulationConfig, SimulationSummary, parse_seconds, simulate};
pub use simple::{Command, run_simple, submit_word};
