/// Internal failure taxonomy for rule evaluation.
///
/// None of these variants ever cross the public API as an `Err`: every one
/// is absorbed into a `false` outcome, and detailed evaluation records the
/// message string instead.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Unknown rule: '{0}'")]
    UnknownRule(String),

    #[error("Empty rule group for '{0}'")]
    EmptyGroup(String),

    #[error("Argument of '{0}' must be an object of rules")]
    BadGroup(String),
}
