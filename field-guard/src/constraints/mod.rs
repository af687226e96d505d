//! Built-in constraints and the rule annotation parser.
//!
//! Four constraints are available, each selected by the prefix of a rule
//! annotation:
//!
//! 1. **Length** (`len:<n>`) - text must be exactly `n` bytes long
//! 2. **Membership** (`in:<a,b,c>`) - text or integer must equal one option
//! 3. **Minimum** (`min:<n>`) - text length or integer value `>= n`
//! 4. **Maximum** (`max:<n>`) - text length or integer value `<= n`
//!
//! A rule is parsed into a [`Constraint`] and then evaluated against a
//! [`FieldValue`](crate::core::FieldValue). Evaluation dispatches on the
//! runtime kind of the value; floats, booleans, collections and nested
//! records are never supported.
//!
//! ## Example
//!
//! ```rust
//! use field_guard::constraints::Constraint;
//! use field_guard::core::FieldValue;
//! use field_guard::error::FieldErrorKind;
//!
//! let status = Constraint::parse("in:active,inactive").unwrap();
//! assert!(status.evaluate(&FieldValue::Str("active")).is_success());
//!
//! // The same option list is reinterpreted for integer fields
//! let result = status.evaluate(&FieldValue::Int(1));
//! assert_eq!(result.kind(), Some(FieldErrorKind::InvalidSyntax));
//! ```

mod bounds;
mod length;
mod rule;
mod values;

pub use bounds::Bound;
pub use length::text_length;
pub use rule::Constraint;

use crate::core::{ConstraintResult, ValueKind};

/// Failure for a constraint applied to a kind it does not support.
pub(crate) fn unsupported(constraint: &str, kind: ValueKind) -> ConstraintResult {
    ConstraintResult::unsupported(format!("{constraint} validation not supported for {kind}"))
}
