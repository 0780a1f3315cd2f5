//! Declarative check suites with structured reporting.
//!
//! A suite is a named group of checks run against arbitrary values. Each
//! check carries a field name, a human-readable statement, and a callback;
//! failures are classified as errors or warnings and aggregated into a
//! [`ValidationReport`]:
//!
//! - [`run`] / [`run_with`] — execute a named suite of checks.
//! - [`Checks`] — the handle a suite callback uses to register checks and
//!   evaluate ad-hoc rule specifications via [`Checks::enforce`].
//! - [`ValidationReport`] — per-field and overall counters, error and
//!   warning statements, and skipped fields.
//! - [`install_default_rules`] — process-wide custom rules merged into
//!   every suite.
//!
//! A suite run never aborts and never returns an error: failing, panicking,
//! and unresolvable checks are all recorded in the report instead.

pub mod defaults;
pub mod report;
pub mod runner;
pub mod suite;

pub use defaults::install_default_rules;
pub use report::{FieldStats, Severity, ValidationReport};
pub use runner::{run_check, CheckOutcome};
pub use suite::{run, run_with, Checks, Enforcer, SuiteOptions};

pub use verdict_core::{RuleSet, RuleSpec};
