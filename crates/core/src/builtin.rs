//! Built-in rule catalog.
//!
//! Rule name constants and their predicates. Every predicate is total: a
//! value or argument of a non-applicable shape makes the rule evaluate
//! `false` rather than panic or error.

use regex::Regex;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Rule name constants
// ---------------------------------------------------------------------------

/// Value is non-null and not the empty string.
pub const RULE_REQUIRED: &str = "required";
/// Value is a JSON string.
pub const RULE_IS_STRING: &str = "is_string";
/// Value is a JSON number.
pub const RULE_IS_NUMBER: &str = "is_number";
/// Value is a JSON boolean.
pub const RULE_IS_BOOLEAN: &str = "is_boolean";
/// Value is a JSON array.
pub const RULE_IS_ARRAY: &str = "is_array";
/// Value is a JSON object.
pub const RULE_IS_OBJECT: &str = "is_object";
/// Value is truthy (`null`, `false`, `0`, and `""` are falsy).
pub const RULE_IS_TRUTHY: &str = "is_truthy";
/// Value is falsy.
pub const RULE_IS_FALSY: &str = "is_falsy";
/// Value deep-equals the argument.
pub const RULE_EQUALS: &str = "equals";
/// String character count (or array length) at least the argument.
pub const RULE_MIN_LENGTH: &str = "min_length";
/// String character count (or array length) at most the argument.
pub const RULE_MAX_LENGTH: &str = "max_length";
/// Numeric value at least the argument.
pub const RULE_MIN_VALUE: &str = "min_value";
/// Numeric value at most the argument.
pub const RULE_MAX_VALUE: &str = "max_value";
/// Value is a member of the argument array.
pub const RULE_ONE_OF: &str = "one_of";
/// String value matches the argument regex.
pub const RULE_MATCHES: &str = "matches";

/// All built-in rule names.
pub const BUILTIN_RULE_NAMES: &[&str] = &[
    RULE_REQUIRED,
    RULE_IS_STRING,
    RULE_IS_NUMBER,
    RULE_IS_BOOLEAN,
    RULE_IS_ARRAY,
    RULE_IS_OBJECT,
    RULE_IS_TRUTHY,
    RULE_IS_FALSY,
    RULE_EQUALS,
    RULE_MIN_LENGTH,
    RULE_MAX_LENGTH,
    RULE_MIN_VALUE,
    RULE_MAX_VALUE,
    RULE_ONE_OF,
    RULE_MATCHES,
];

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Resolve a built-in rule name to its predicate.
pub fn builtin(name: &str) -> Option<fn(&Value, &Value) -> bool> {
    match name {
        RULE_REQUIRED => Some(required),
        RULE_IS_STRING => Some(is_string),
        RULE_IS_NUMBER => Some(is_number),
        RULE_IS_BOOLEAN => Some(is_boolean),
        RULE_IS_ARRAY => Some(is_array),
        RULE_IS_OBJECT => Some(is_object),
        RULE_IS_TRUTHY => Some(is_truthy),
        RULE_IS_FALSY => Some(is_falsy),
        RULE_EQUALS => Some(equals),
        RULE_MIN_LENGTH => Some(min_length),
        RULE_MAX_LENGTH => Some(max_length),
        RULE_MIN_VALUE => Some(min_value),
        RULE_MAX_VALUE => Some(max_value),
        RULE_ONE_OF => Some(one_of),
        RULE_MATCHES => Some(matches),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn required(value: &Value, _arg: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn is_string(value: &Value, _arg: &Value) -> bool {
    value.is_string()
}

fn is_number(value: &Value, _arg: &Value) -> bool {
    value.is_number()
}

fn is_boolean(value: &Value, _arg: &Value) -> bool {
    value.is_boolean()
}

fn is_array(value: &Value, _arg: &Value) -> bool {
    value.is_array()
}

fn is_object(value: &Value, _arg: &Value) -> bool {
    value.is_object()
}

fn is_truthy(value: &Value, _arg: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_falsy(value: &Value, arg: &Value) -> bool {
    !is_truthy(value, arg)
}

fn equals(value: &Value, arg: &Value) -> bool {
    value == arg
}

/// Character count of strings, element count of arrays. `None` for shapes
/// that have no length.
fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn min_length(value: &Value, arg: &Value) -> bool {
    match (length_of(value), arg.as_u64()) {
        (Some(len), Some(min)) => len >= min as usize,
        _ => false,
    }
}

fn max_length(value: &Value, arg: &Value) -> bool {
    match (length_of(value), arg.as_u64()) {
        (Some(len), Some(max)) => len <= max as usize,
        _ => false,
    }
}

fn min_value(value: &Value, arg: &Value) -> bool {
    match (value.as_f64(), arg.as_f64()) {
        (Some(num), Some(min)) => num >= min,
        _ => false,
    }
}

fn max_value(value: &Value, arg: &Value) -> bool {
    match (value.as_f64(), arg.as_f64()) {
        (Some(num), Some(max)) => num <= max,
        _ => false,
    }
}

fn one_of(value: &Value, arg: &Value) -> bool {
    arg.as_array().map(|allowed| allowed.contains(value)).unwrap_or(false)
}

fn matches(value: &Value, arg: &Value) -> bool {
    let (Some(s), Some(pattern)) = (value.as_str(), arg.as_str()) else {
        return false;
    };
    match Regex::new(pattern) {
        Ok(re) => re.is_match(s),
        // Invalid pattern fails closed.
        Err(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: &str, value: Value, arg: Value) -> bool {
        builtin(rule).expect("rule should exist")(&value, &arg)
    }

    #[test]
    fn all_names_dispatch() {
        for name in BUILTIN_RULE_NAMES {
            assert!(builtin(name).is_some(), "missing predicate for '{name}'");
        }
        assert!(builtin("no_such_rule").is_none());
    }

    // -- required -------------------------------------------------------------

    #[test]
    fn required_accepts_values() {
        assert!(check(RULE_REQUIRED, json!("hello"), Value::Null));
        assert!(check(RULE_REQUIRED, json!(0), Value::Null));
        assert!(check(RULE_REQUIRED, json!(false), Value::Null));
    }

    #[test]
    fn required_rejects_null_and_empty_string() {
        assert!(!check(RULE_REQUIRED, Value::Null, Value::Null));
        assert!(!check(RULE_REQUIRED, json!(""), Value::Null));
    }

    // -- type checks ----------------------------------------------------------

    #[test]
    fn type_checks() {
        assert!(check(RULE_IS_STRING, json!("x"), Value::Null));
        assert!(!check(RULE_IS_STRING, json!(1), Value::Null));
        assert!(check(RULE_IS_NUMBER, json!(1.5), Value::Null));
        assert!(!check(RULE_IS_NUMBER, json!("1.5"), Value::Null));
        assert!(check(RULE_IS_BOOLEAN, json!(true), Value::Null));
        assert!(check(RULE_IS_ARRAY, json!([1, 2]), Value::Null));
        assert!(check(RULE_IS_OBJECT, json!({"a": 1}), Value::Null));
        assert!(!check(RULE_IS_OBJECT, json!([1]), Value::Null));
    }

    // -- truthiness -----------------------------------------------------------

    #[test]
    fn truthy_and_falsy() {
        for falsy in [Value::Null, json!(false), json!(0), json!("")] {
            assert!(!check(RULE_IS_TRUTHY, falsy.clone(), Value::Null));
            assert!(check(RULE_IS_FALSY, falsy, Value::Null));
        }
        for truthy in [json!(true), json!(1), json!("x"), json!([]), json!({})] {
            assert!(check(RULE_IS_TRUTHY, truthy.clone(), Value::Null));
            assert!(!check(RULE_IS_FALSY, truthy, Value::Null));
        }
    }

    // -- equals ---------------------------------------------------------------

    #[test]
    fn equals_deep_compares() {
        assert!(check(RULE_EQUALS, json!({"a": [1, 2]}), json!({"a": [1, 2]})));
        assert!(!check(RULE_EQUALS, json!({"a": [1, 2]}), json!({"a": [2, 1]})));
    }

    // -- length bounds --------------------------------------------------------

    #[test]
    fn length_bounds_on_strings() {
        assert!(check(RULE_MIN_LENGTH, json!("hello"), json!(5)));
        assert!(!check(RULE_MIN_LENGTH, json!("hi"), json!(5)));
        assert!(check(RULE_MAX_LENGTH, json!("hi"), json!(5)));
        assert!(!check(RULE_MAX_LENGTH, json!("hello!"), json!(5)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(check(RULE_MAX_LENGTH, json!("héllo"), json!(5)));
    }

    #[test]
    fn length_bounds_on_arrays() {
        assert!(check(RULE_MIN_LENGTH, json!([1, 2, 3]), json!(2)));
        assert!(!check(RULE_MAX_LENGTH, json!([1, 2, 3]), json!(2)));
    }

    #[test]
    fn length_bounds_reject_other_shapes() {
        assert!(!check(RULE_MIN_LENGTH, json!(42), json!(1)));
        assert!(!check(RULE_MAX_LENGTH, json!("x"), json!("not a number")));
    }

    // -- numeric bounds -------------------------------------------------------

    #[test]
    fn numeric_bounds() {
        assert!(check(RULE_MIN_VALUE, json!(5), json!(5)));
        assert!(!check(RULE_MIN_VALUE, json!(4.9), json!(5)));
        assert!(check(RULE_MAX_VALUE, json!(5), json!(5)));
        assert!(!check(RULE_MAX_VALUE, json!(5.1), json!(5)));
    }

    #[test]
    fn numeric_bounds_reject_non_numbers() {
        assert!(!check(RULE_MIN_VALUE, json!("5"), json!(1)));
        assert!(!check(RULE_MAX_VALUE, json!(5), json!("ten")));
    }

    // -- one_of ---------------------------------------------------------------

    #[test]
    fn one_of_membership() {
        assert!(check(RULE_ONE_OF, json!("b"), json!(["a", "b", "c"])));
        assert!(!check(RULE_ONE_OF, json!("d"), json!(["a", "b", "c"])));
        assert!(!check(RULE_ONE_OF, json!("a"), json!("not an array")));
    }

    // -- matches --------------------------------------------------------------

    #[test]
    fn matches_regex() {
        assert!(check(RULE_MATCHES, json!("hello"), json!("^[a-z]+$")));
        assert!(!check(RULE_MATCHES, json!("Hello123"), json!("^[a-z]+$")));
    }

    #[test]
    fn matches_fails_closed() {
        // Non-string value, non-string pattern, invalid pattern.
        assert!(!check(RULE_MATCHES, json!(5), json!("^[0-9]+$")));
        assert!(!check(RULE_MATCHES, json!("x"), json!(7)));
        assert!(!check(RULE_MATCHES, json!("x"), json!("([unclosed")));
    }
}
