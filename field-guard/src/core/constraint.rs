//! Outcome of evaluating one constraint against one field value.

use crate::error::{FieldError, FieldErrorKind};
use serde::{Deserialize, Serialize};

/// The status of a constraint evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintStatus {
    /// The constraint check passed
    Success,
    /// The constraint check failed
    Failure,
}

impl ConstraintStatus {
    /// Returns true if this is a Success status.
    pub fn is_success(&self) -> bool {
        matches!(self, ConstraintStatus::Success)
    }

    /// Returns true if this is a Failure status.
    pub fn is_failure(&self) -> bool {
        matches!(self, ConstraintStatus::Failure)
    }
}

/// The result of evaluating a constraint.
///
/// A success carries nothing; a failure carries its kind and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConstraintResult {
    Success,
    Failure {
        kind: FieldErrorKind,
        message: String,
    },
}

impl ConstraintResult {
    /// Creates a successful constraint result.
    pub fn success() -> Self {
        ConstraintResult::Success
    }

    /// Creates a failed constraint result of the given kind.
    pub fn failure(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        ConstraintResult::Failure {
            kind,
            message: message.into(),
        }
    }

    /// The value did not satisfy the constraint.
    pub fn violated(message: impl Into<String>) -> Self {
        Self::failure(FieldErrorKind::ConstraintViolated, message)
    }

    /// The constraint cannot be applied to this type of value.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::failure(FieldErrorKind::UnsupportedType, message)
    }

    /// The rule is malformed for this value.
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        Self::failure(FieldErrorKind::InvalidSyntax, message)
    }

    pub fn status(&self) -> ConstraintStatus {
        match self {
            ConstraintResult::Success => ConstraintStatus::Success,
            ConstraintResult::Failure { .. } => ConstraintStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    pub fn is_failure(&self) -> bool {
        self.status().is_failure()
    }

    /// Returns the failure kind, if any.
    pub fn kind(&self) -> Option<FieldErrorKind> {
        match self {
            ConstraintResult::Success => None,
            ConstraintResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ConstraintResult::Success => None,
            ConstraintResult::Failure { message, .. } => Some(message),
        }
    }

    /// Converts a failure into a [`FieldError`] attributed to `field`.
    pub fn into_field_error(self, field: &str) -> Option<FieldError> {
        match self {
            ConstraintResult::Success => None,
            ConstraintResult::Failure { kind, message } => {
                Some(FieldError::new(field, kind, message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_result_builders() {
        let success = ConstraintResult::success();
        assert_eq!(success.status(), ConstraintStatus::Success);
        assert!(success.kind().is_none());
        assert!(success.message().is_none());

        let violated = ConstraintResult::violated("string length must be 5");
        assert_eq!(violated.status(), ConstraintStatus::Failure);
        assert_eq!(violated.kind(), Some(FieldErrorKind::ConstraintViolated));
        assert_eq!(violated.message(), Some("string length must be 5"));

        let unsupported = ConstraintResult::unsupported("length validation not supported for int");
        assert_eq!(unsupported.kind(), Some(FieldErrorKind::UnsupportedType));

        let syntax = ConstraintResult::invalid_syntax("bad option");
        assert_eq!(syntax.kind(), Some(FieldErrorKind::InvalidSyntax));
    }

    #[test]
    fn test_into_field_error() {
        assert!(ConstraintResult::success().into_field_error("code").is_none());

        let err = ConstraintResult::violated("too short")
            .into_field_error("code")
            .unwrap();
        assert_eq!(err.field(), "code");
        assert_eq!(err.kind(), FieldErrorKind::ConstraintViolated);
        assert_eq!(err.to_string(), "too short");
    }

    #[test]
    fn test_result_serde() {
        let json = serde_json::to_string(&ConstraintResult::violated("nope")).unwrap();
        assert_eq!(
            json,
            r#"{"status":"failure","kind":"constraint_violated","message":"nope"}"#
        );
        let json = serde_json::to_string(&ConstraintResult::success()).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }
}
