//! Rule specification and custom rule set types.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A rule specification: rule name → rule argument.
///
/// Combinator entries (`all_of`, `any_of`) take a nested object of this
/// same shape as their argument; plain rules take a scalar, array, or
/// object argument interpreted by the individual predicate.
pub type RuleSpec = serde_json::Map<String, Value>;

/// A rule predicate: does `value` satisfy the rule given `argument`?
pub type Predicate = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// A set of named custom rules, consulted before the built-in catalog.
///
/// Read-only for the lifetime of a run; predicates are `Send + Sync` so a
/// set can be shared across threads.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, Predicate>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under `name`, replacing any existing entry.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        self.rules.insert(name.into(), Arc::new(predicate));
    }

    /// Look up a registered predicate by name.
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Layer `overrides` on top of `base`: on a name collision the
    /// override wins.
    pub fn merged(base: &RuleSet, overrides: &RuleSet) -> RuleSet {
        let mut rules = base.rules.clone();
        for (name, predicate) in &overrides.rules {
            rules.insert(name.clone(), predicate.clone());
        }
        RuleSet { rules }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RuleSet").field("rules", &names).finish()
    }
}
