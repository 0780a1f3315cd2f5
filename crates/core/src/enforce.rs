//! Rule specification evaluation entry points.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builtin::builtin;
use crate::combinator::{self, ALL_OF};
use crate::error::RuleError;
use crate::rules::{RuleSet, RuleSpec};

/// Outcome of one top-level rule in a detailed evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub passed: bool,
    /// Absorbed failure reason (unknown rule, malformed group), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Detailed result of evaluating a full rule specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub passed: bool,
    pub checks: Vec<RuleOutcome>,
}

/// Evaluate every rule in `spec` against `value`; true iff all hold.
///
/// Evaluation is exhaustive; every entry runs regardless of earlier
/// failures. Unknown rule names and malformed combinator groups count as
/// failing; no error is raised. An empty `spec` holds vacuously (emptiness
/// is only rejected inside combinator groups).
pub fn enforce(value: &Value, spec: &RuleSpec, rules: &RuleSet) -> bool {
    let mut success = 0usize;
    for (name, arg) in spec {
        if run_rule(value, name, arg, rules) {
            success += 1;
        }
    }

    success == spec.len()
}

/// Like [`enforce`], but returns a per-rule breakdown.
pub fn evaluate(value: &Value, spec: &RuleSpec, rules: &RuleSet) -> Evaluation {
    let mut checks = Vec::with_capacity(spec.len());
    for (name, arg) in spec {
        let outcome = match resolve(value, name, arg, rules) {
            Ok(passed) => RuleOutcome {
                rule: name.clone(),
                passed,
                detail: None,
            },
            Err(err) => RuleOutcome {
                rule: name.clone(),
                passed: false,
                detail: Some(err.to_string()),
            },
        };
        checks.push(outcome);
    }

    Evaluation {
        passed: checks.iter().all(|c| c.passed),
        checks,
    }
}

/// Evaluate a single named rule, absorbing the failure taxonomy into `false`.
pub(crate) fn run_rule(value: &Value, name: &str, arg: &Value, rules: &RuleSet) -> bool {
    resolve(value, name, arg, rules).unwrap_or(false)
}

/// Single-rule evaluation with the failure taxonomy made explicit.
///
/// Resolution order: combinators, then the custom rule set, then the
/// built-in catalog.
fn resolve(value: &Value, name: &str, arg: &Value, rules: &RuleSet) -> Result<bool, RuleError> {
    if combinator::is_combinator(name) {
        let tests = arg
            .as_object()
            .ok_or_else(|| RuleError::BadGroup(name.to_string()))?;
        if tests.is_empty() {
            return Err(RuleError::EmptyGroup(name.to_string()));
        }
        return Ok(if name == ALL_OF {
            combinator::all_of(value, tests, rules)
        } else {
            combinator::any_of(value, tests, rules)
        });
    }

    if let Some(predicate) = rules.get(name) {
        return Ok(predicate(value, arg));
    }
    if let Some(predicate) = builtin(name) {
        return Ok(predicate(value, arg));
    }

    Err(RuleError::UnknownRule(name.to_string()))
}
