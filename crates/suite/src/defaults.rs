//! Process-wide default custom rules.
//!
//! The one piece of process-wide state in the library. The composition
//! root installs a rule set once; every subsequent suite construction
//! reads it and layers per-run custom rules on top. The engine itself
//! only ever receives an explicit, already-merged [`RuleSet`].

use std::sync::OnceLock;

use verdict_core::RuleSet;

static DEFAULT_RULES: OnceLock<RuleSet> = OnceLock::new();

/// Install the process-wide default rule set.
///
/// The first installation wins; returns `false` (and changes nothing) if
/// defaults were already installed. Never panics or errors.
pub fn install_default_rules(rules: RuleSet) -> bool {
    DEFAULT_RULES.set(rules).is_ok()
}

/// The installed default rule set, if any.
pub(crate) fn default_rules() -> Option<&'static RuleSet> {
    DEFAULT_RULES.get()
}
