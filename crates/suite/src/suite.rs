//! Suite orchestration: runs registered checks and aggregates a report.

use serde_json::Value;
use verdict_core::{Evaluation, RuleSet, RuleSpec};

use crate::defaults;
use crate::report::{Severity, ValidationReport};
use crate::runner::{run_check, CheckOutcome};

/// Configuration for a suite run. All fields are optional.
#[derive(Debug, Default)]
pub struct SuiteOptions {
    /// When non-empty, only checks for these fields run; checks for any
    /// other field are recorded as skipped.
    pub only: Vec<String>,
    /// Per-run custom rules. Shadow process defaults and built-in rules of
    /// the same name.
    pub rules: RuleSet,
}

/// Handle passed to the suite callback. Registers checks against the
/// report and exposes rule evaluation over the suite's merged rule set.
pub struct Checks {
    report: ValidationReport,
    only: Vec<String>,
    rules: RuleSet,
}

/// Rule evaluator detached from the report.
///
/// Check callbacks cannot borrow [`Checks`] (the suite holds it mutably
/// while a check runs), so rule-based checks take an `Enforcer` from
/// [`Checks::enforcer`] first and move it into the callback.
#[derive(Debug, Clone)]
pub struct Enforcer {
    rules: RuleSet,
}

impl Enforcer {
    /// Evaluate a rule specification against a value; true iff every rule
    /// holds.
    pub fn enforce(&self, value: &Value, spec: &RuleSpec) -> bool {
        verdict_core::enforce(value, spec, &self.rules)
    }

    /// Like [`Enforcer::enforce`], but returns a per-rule breakdown.
    pub fn evaluate(&self, value: &Value, spec: &RuleSpec) -> Evaluation {
        verdict_core::evaluate(value, spec, &self.rules)
    }
}

impl Checks {
    fn new(name: &str, options: SuiteOptions) -> Self {
        let rules = match defaults::default_rules() {
            Some(base) => RuleSet::merged(base, &options.rules),
            None => options.rules,
        };
        Checks {
            report: ValidationReport::new(name),
            only: options.only,
            rules,
        }
    }

    /// Run one check against `field` with an explicit severity.
    ///
    /// A check excluded by the field filter is recorded as skipped and
    /// returns `true` without touching any counter. Otherwise the callback
    /// runs to completion (panics absorbed as failure), the test counters
    /// move, and a failure files `statement` under the given severity.
    /// Returns the check's validity.
    pub fn check<O, F>(&mut self, field: &str, statement: &str, severity: Severity, check: F) -> bool
    where
        O: CheckOutcome,
        F: FnOnce() -> O,
    {
        if !self.only.is_empty() && !self.only.iter().any(|f| f == field) {
            tracing::debug!(field = %field, "Check skipped by field filter");
            self.report.record_skip(field);
            return true;
        }

        let valid = run_check(check);
        if !valid {
            tracing::debug!(
                field = %field,
                statement = %statement,
                severity = ?severity,
                "Check failed"
            );
            self.report.record_failure(field, statement, severity);
        }
        self.report.record_test(field);

        valid
    }

    /// Run an error-severity check.
    pub fn pass<O, F>(&mut self, field: &str, statement: &str, check: F) -> bool
    where
        O: CheckOutcome,
        F: FnOnce() -> O,
    {
        self.check(field, statement, Severity::Error, check)
    }

    /// Run a warning-severity check.
    pub fn warn<O, F>(&mut self, field: &str, statement: &str, check: F) -> bool
    where
        O: CheckOutcome,
        F: FnOnce() -> O,
    {
        self.check(field, statement, Severity::Warning, check)
    }

    /// Evaluate a rule specification against a value using this suite's
    /// merged rule set. Does not touch the report.
    pub fn enforce(&self, value: &Value, spec: &RuleSpec) -> bool {
        verdict_core::enforce(value, spec, &self.rules)
    }

    /// A detached evaluator sharing this suite's merged rule set, for use
    /// inside check callbacks.
    pub fn enforcer(&self) -> Enforcer {
        Enforcer {
            rules: self.rules.clone(),
        }
    }
}

/// Run a named suite with default options.
pub fn run<F>(name: &str, passes: F) -> ValidationReport
where
    F: FnOnce(&mut Checks),
{
    run_with(name, SuiteOptions::default(), passes)
}

/// Run a named suite with explicit options.
///
/// The callback is invoked synchronously exactly once; every check it
/// registers executes before the report is returned.
pub fn run_with<F>(name: &str, options: SuiteOptions, passes: F) -> ValidationReport
where
    F: FnOnce(&mut Checks),
{
    let mut checks = Checks::new(name, options);
    passes(&mut checks);
    checks.report
}
