//! Pure rule-enforcement engine.
//!
//! Evaluates named predicate rules against `serde_json::Value`s:
//!
//! - [`RuleSet`] — named custom predicates, consulted before the built-in
//!   catalog and shareable across threads.
//! - [`builtin`] — the built-in rule catalog (`required`, `is_string`,
//!   `min_length`, `matches`, ...).
//! - [`combinator`] — `all_of` / `any_of` aggregation over nested rule
//!   groups.
//! - [`enforce`] / [`evaluate`] — specification evaluation entry points,
//!   returning a plain boolean or a per-rule breakdown.
//!
//! The engine never panics and never surfaces an error to its caller:
//! unknown rule names, malformed combinator arguments, and empty rule
//! groups all evaluate as failing.

pub mod builtin;
pub mod combinator;
pub mod enforce;
pub mod error;
pub mod rules;

pub use enforce::{enforce, evaluate, Evaluation, RuleOutcome};
pub use error::RuleError;
pub use rules::{Predicate, RuleSet, RuleSpec};
