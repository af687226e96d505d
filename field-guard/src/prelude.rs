//! Prelude for commonly used types and traits in field-guard.

pub use crate::constraints::Constraint;
pub use crate::core::{
    validate, validate_report, AsFieldValue, FieldDescriptor, FieldValue, Inspect, Shape,
    ValidationReport, Validator, ValidatorConfig, ValueKind,
};
pub use crate::error::{FieldError, FieldErrorKind, GuardError, Result, ValidationErrors};
pub use crate::logging::LogConfig;
pub use crate::record;
