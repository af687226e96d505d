//! Error types for the field-guard validation library.
//!
//! Errors come in two layers. A [`GuardError`] aborts a whole validation
//! call, either because the value handed in was not a record or because one
//! or more fields failed. The per-field failures are [`FieldError`]s, each
//! tagged with a [`FieldErrorKind`], collected in declaration order inside
//! [`ValidationErrors`].

use crate::core::ValueKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The main error type for the field-guard library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuardError {
    /// The validated value is not a record. No field was inspected.
    #[error("wrong argument given: expected a struct, found {found}")]
    NotAStruct {
        /// Kind of the value that was passed instead
        found: ValueKind,
    },

    /// One or more fields failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl GuardError {
    /// Returns the per-field failures, if this error carries any.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            GuardError::Invalid(errors) => Some(errors),
            GuardError::NotAStruct { .. } => None,
        }
    }

    /// Returns true if the call failed before any field was inspected.
    pub fn is_not_a_struct(&self) -> bool {
        matches!(self, GuardError::NotAStruct { .. })
    }
}

/// A type alias for `Result<T, GuardError>`.
///
/// # Examples
///
/// ```rust
/// use field_guard::error::Result;
///
/// fn check_input() -> Result<()> {
///     Ok(())
/// }
/// # check_input().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors produced while parsing a rule annotation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The rule does not start with any recognized prefix.
    #[error("invalid validator syntax: unrecognized rule '{rule}'")]
    InvalidSyntax { rule: String },

    /// The numeric argument of `len`, `min` or `max` is not a base-10 integer.
    #[error("invalid validator syntax: '{argument}' is not an integer in rule '{rule}'")]
    NotAnInteger { rule: String, argument: String },

    /// An `in:` rule without any options.
    #[error("empty option list in rule '{rule}'")]
    EmptyMembership { rule: String },
}

/// Category of a single field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A rule sits on a field that is not public
    NotAccessible,
    /// The rule string could not be parsed or applied as written
    InvalidSyntax,
    /// The constraint does not support the field's type
    UnsupportedType,
    /// The value was checked and did not satisfy the constraint
    ConstraintViolated,
}

impl FieldErrorKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::NotAccessible => "not_accessible",
            FieldErrorKind::InvalidSyntax => "invalid_syntax",
            FieldErrorKind::UnsupportedType => "unsupported_type",
            FieldErrorKind::ConstraintViolated => "constraint_violated",
        }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failure attributed to one field of a record.
///
/// The `Display` output is the bare message; the field name is available
/// through [`FieldError::field`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct FieldError {
    field: String,
    kind: FieldErrorKind,
    message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(
        field: impl Into<String>,
        kind: FieldErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    /// Creates the error recorded for a rule on a non-public field.
    pub fn not_accessible(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("validation for non-public field '{field}' is not allowed");
        Self::new(field, FieldErrorKind::NotAccessible, message)
    }

    /// Wraps a rule parse failure, attributing it to `field`.
    pub fn from_parse(field: impl Into<String>, error: &ParseError) -> Self {
        Self::new(field, FieldErrorKind::InvalidSyntax, error.to_string())
    }

    /// The name of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The failure category.
    pub fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An ordered collection of field failures.
///
/// Renders as the failure messages joined by newlines, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a failure.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Gets all failures of a specific kind.
    pub fn of_kind(&self, kind: FieldErrorKind) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.kind == kind).collect()
    }

    /// Returns the failures as a slice.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_struct_error() {
        let err = GuardError::NotAStruct {
            found: ValueKind::Int,
        };
        assert_eq!(
            err.to_string(),
            "wrong argument given: expected a struct, found int"
        );
        assert!(err.is_not_a_struct());
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_validation_errors_render_newline_joined() {
        let errors: ValidationErrors = vec![
            FieldError::new("code", FieldErrorKind::ConstraintViolated, "first"),
            FieldError::new("age", FieldErrorKind::UnsupportedType, "second"),
        ]
        .into();

        assert_eq!(errors.to_string(), "first\nsecond");
        assert_eq!(errors.len(), 2);

        let err = GuardError::from(errors);
        assert_eq!(err.to_string(), "first\nsecond");
        assert_eq!(err.field_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_empty_validation_errors_render_empty() {
        assert_eq!(ValidationErrors::new().to_string(), "");
    }

    #[test]
    fn test_field_error_from_parse() {
        let parse = ParseError::EmptyMembership {
            rule: "in:".to_string(),
        };
        let err = FieldError::from_parse("status", &parse);
        assert_eq!(err.field(), "status");
        assert_eq!(err.kind(), FieldErrorKind::InvalidSyntax);
        assert_eq!(err.to_string(), "empty option list in rule 'in:'");
    }

    #[test]
    fn test_not_accessible_message() {
        let err = FieldError::not_accessible("secret");
        assert_eq!(err.kind(), FieldErrorKind::NotAccessible);
        assert!(err.message().contains("'secret'"));
    }

    #[test]
    fn test_of_kind_filters() {
        let errors: ValidationErrors = vec![
            FieldError::new("a", FieldErrorKind::InvalidSyntax, "x"),
            FieldError::new("b", FieldErrorKind::ConstraintViolated, "y"),
            FieldError::new("c", FieldErrorKind::InvalidSyntax, "z"),
        ]
        .into_iter()
        .collect();

        let syntax = errors.of_kind(FieldErrorKind::InvalidSyntax);
        assert_eq!(syntax.len(), 2);
        assert_eq!(syntax[0].field(), "a");
        assert_eq!(syntax[1].field(), "c");
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&FieldErrorKind::UnsupportedType).unwrap();
        assert_eq!(json, "\"unsupported_type\"");

        let kind: FieldErrorKind = serde_json::from_str("\"not_accessible\"").unwrap();
        assert_eq!(kind, FieldErrorKind::NotAccessible);
    }
}
