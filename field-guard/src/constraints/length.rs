//! Exact string length constraint (`len:<n>`).

use super::unsupported;
use crate::core::{ConstraintResult, FieldValue};

pub(crate) const NAME: &str = "length";

/// Returns the length of a text value in bytes of its UTF-8 encoding.
///
/// A `str` never exceeds `isize::MAX` bytes, so the conversion only
/// saturates on targets wider than 64 bits.
pub fn text_length(value: &str) -> i64 {
    i64::try_from(value.len()).unwrap_or(i64::MAX)
}

/// Checks that a text value is exactly `length` bytes long.
pub(crate) fn evaluate(length: i64, value: &FieldValue<'_>) -> ConstraintResult {
    match value {
        FieldValue::Str(s) => {
            if text_length(s) == length {
                ConstraintResult::success()
            } else {
                ConstraintResult::violated(format!("string length must be {length}"))
            }
        }
        other => unsupported(NAME, other.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldErrorKind;

    #[test]
    fn test_exact_length_passes() {
        let result = evaluate(5, &FieldValue::Str("hello"));
        assert!(result.is_success());
    }

    #[test]
    fn test_exact_length_failure() {
        for text in ["hi", "hello!", ""] {
            let result = evaluate(5, &FieldValue::Str(text));
            assert_eq!(result.kind(), Some(FieldErrorKind::ConstraintViolated));
            assert_eq!(result.message(), Some("string length must be 5"));
        }
    }

    #[test]
    fn test_utf8_multibyte_characters() {
        // Bytes, not characters
        assert!(evaluate(6, &FieldValue::Str("你好")).is_success());
        assert!(evaluate(8, &FieldValue::Str("🦀🔥")).is_success());
        assert!(evaluate(5, &FieldValue::Str("café")).is_success());

        let result = evaluate(2, &FieldValue::Str("你好"));
        assert_eq!(result.message(), Some("string length must be 2"));
    }

    #[test]
    fn test_negative_length_never_matches() {
        let result = evaluate(-1, &FieldValue::Str(""));
        assert_eq!(result.kind(), Some(FieldErrorKind::ConstraintViolated));
    }

    #[test]
    fn test_unsupported_types() {
        let cases = [
            (FieldValue::Int(5), "int"),
            (FieldValue::Float(5.0), "float"),
            (FieldValue::Bool(true), "bool"),
            (FieldValue::Slice, "slice"),
            (FieldValue::Map, "map"),
            (FieldValue::Struct, "struct"),
        ];
        for (value, kind) in cases {
            let result = evaluate(5, &value);
            assert_eq!(result.kind(), Some(FieldErrorKind::UnsupportedType));
            assert_eq!(
                result.message(),
                Some(format!("length validation not supported for {kind}").as_str())
            );
        }
    }
}
