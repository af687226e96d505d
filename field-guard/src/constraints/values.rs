//! Set membership constraint (`in:<a,b,c>`).

use super::unsupported;
use crate::core::{ConstraintResult, FieldValue};

pub(crate) const NAME: &str = "in";

/// Checks that a value equals one of `options`.
///
/// Text values compare against the raw tokens. Integer values reinterpret
/// every token as a base-10 integer first; a token that does not parse makes
/// the rule itself invalid for this field, whatever the value.
pub(crate) fn evaluate(options: &[String], value: &FieldValue<'_>) -> ConstraintResult {
    match value {
        FieldValue::Str(s) => {
            if options.iter().any(|option| option == s) {
                ConstraintResult::success()
            } else {
                ConstraintResult::violated(not_in_message(options))
            }
        }
        FieldValue::Int(v) => match parse_integer_options(options) {
            Ok(allowed) if allowed.contains(v) => ConstraintResult::success(),
            Ok(_) => ConstraintResult::violated(not_in_message(options)),
            Err(token) => ConstraintResult::invalid_syntax(format!(
                "invalid validator syntax: option '{token}' is not an integer"
            )),
        },
        other => unsupported(NAME, other.kind()),
    }
}

fn parse_integer_options(options: &[String]) -> Result<Vec<i64>, &str> {
    options
        .iter()
        .map(|option| option.parse::<i64>().map_err(|_| option.as_str()))
        .collect()
}

fn not_in_message(options: &[String]) -> String {
    format!("value must be one of {}", options.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldErrorKind;

    fn options(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_membership() {
        let allowed = options(&["a", "b", "c"]);
        assert!(evaluate(&allowed, &FieldValue::Str("b")).is_success());

        let result = evaluate(&allowed, &FieldValue::Str("z"));
        assert_eq!(result.kind(), Some(FieldErrorKind::ConstraintViolated));
        assert_eq!(result.message(), Some("value must be one of a, b, c"));
    }

    #[test]
    fn test_text_membership_is_exact() {
        let allowed = options(&["admin", "user"]);
        assert!(evaluate(&allowed, &FieldValue::Str("Admin")).is_failure());
        assert!(evaluate(&allowed, &FieldValue::Str(" user")).is_failure());
        assert!(evaluate(&allowed, &FieldValue::Str("")).is_failure());
    }

    #[test]
    fn test_text_accepts_numeric_looking_tokens() {
        let allowed = options(&["1", "2", "x"]);
        assert!(evaluate(&allowed, &FieldValue::Str("x")).is_success());
        assert!(evaluate(&allowed, &FieldValue::Str("2")).is_success());
    }

    #[test]
    fn test_integer_membership() {
        let allowed = options(&["1", "2", "3"]);
        assert!(evaluate(&allowed, &FieldValue::Int(2)).is_success());

        let result = evaluate(&allowed, &FieldValue::Int(4));
        assert_eq!(result.kind(), Some(FieldErrorKind::ConstraintViolated));
        assert_eq!(result.message(), Some("value must be one of 1, 2, 3"));
    }

    #[test]
    fn test_integer_membership_with_signs() {
        let allowed = options(&["-1", "+5"]);
        assert!(evaluate(&allowed, &FieldValue::Int(-1)).is_success());
        assert!(evaluate(&allowed, &FieldValue::Int(5)).is_success());
    }

    #[test]
    fn test_non_numeric_option_on_integer_is_syntax_error() {
        let allowed = options(&["a", "b"]);
        let result = evaluate(&allowed, &FieldValue::Int(1));
        assert_eq!(result.kind(), Some(FieldErrorKind::InvalidSyntax));
        assert!(result.message().unwrap().contains("'a'"));

        // Even when an earlier token would have matched
        let mixed = options(&["2", "x"]);
        let result = evaluate(&mixed, &FieldValue::Int(2));
        assert_eq!(result.kind(), Some(FieldErrorKind::InvalidSyntax));
    }

    #[test]
    fn test_unsupported_types() {
        let allowed = options(&["1"]);
        for value in [FieldValue::Float(1.0), FieldValue::Bool(true), FieldValue::Slice] {
            let result = evaluate(&allowed, &value);
            assert_eq!(result.kind(), Some(FieldErrorKind::UnsupportedType));
            assert!(result
                .message()
                .unwrap()
                .starts_with("in validation not supported for "));
        }
    }
}
