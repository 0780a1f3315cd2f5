//! Rule combinators: aggregate verdicts over nested rule groups.

use serde_json::Value;

use crate::enforce::run_rule;
use crate::rules::{RuleSet, RuleSpec};

/// Combinator: every nested rule must hold.
pub const ALL_OF: &str = "all_of";
/// Combinator: at least one nested rule must hold.
pub const ANY_OF: &str = "any_of";

/// Returns `true` if `name` is a combinator rule name.
pub fn is_combinator(name: &str) -> bool {
    matches!(name, ALL_OF | ANY_OF)
}

/// True iff every rule in `tests` holds for `value`.
///
/// Every entry is evaluated; there is no short-circuit. An empty group can
/// never pass.
pub fn all_of(value: &Value, tests: &RuleSpec, rules: &RuleSet) -> bool {
    if tests.is_empty() {
        return false;
    }

    let mut success = 0usize;
    for (name, arg) in tests {
        if run_rule(value, name, arg, rules) {
            success += 1;
        }
    }

    success == tests.len()
}

/// True iff at least one rule in `tests` holds for `value`.
///
/// Every entry is evaluated; there is no short-circuit. An empty group
/// yields zero successes and therefore fails.
pub fn any_of(value: &Value, tests: &RuleSpec, rules: &RuleSet) -> bool {
    let mut success = 0usize;
    for (name, arg) in tests {
        if run_rule(value, name, arg, rules) {
            success += 1;
        }
    }

    success > 0
}
