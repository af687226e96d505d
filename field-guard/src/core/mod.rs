//! Core validation types for the field-guard library.
//!
//! ## Overview
//!
//! - **[`Inspect`]** / **[`FieldDescriptor`]**: how a record describes its
//!   fields, rules and values to the validator
//! - **[`Validator`]**: walks a record's fields in declaration order and
//!   applies their rules
//! - **[`ConstraintResult`]**: the outcome of one constraint on one value
//! - **[`ValidationReport`]**: every field failure of one record
//!
//! ## Architecture
//!
//! ```text
//! record ──inspect──▶ Shape::Struct(fields)
//!                        │
//!                        ├── field without rule ─────────▶ skipped
//!                        ├── non-public field with rule ─▶ NotAccessible
//!                        └── public field with rule
//!                              ├── Constraint::parse ────▶ InvalidSyntax
//!                              └── Constraint::evaluate ─▶ ConstraintResult
//! ```
//!
//! Failures never stop the walk; only a non-record input aborts the call.

mod constraint;
mod record;
mod result;
mod validator;

pub use constraint::{ConstraintResult, ConstraintStatus};
pub use record::{AsFieldValue, FieldDescriptor, FieldValue, Inspect, Shape, ValueKind};
pub use result::{ValidationMetrics, ValidationReport};
pub use validator::{validate, validate_report, Validator, ValidatorConfig};
