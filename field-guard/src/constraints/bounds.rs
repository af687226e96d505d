//! Minimum and maximum constraints (`min:<n>`, `max:<n>`).
//!
//! Text values are bounded by their length in bytes, integers by their
//! value. Both bounds are inclusive.

use super::length::text_length;
use super::unsupported;
use crate::core::{ConstraintResult, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an inclusive bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    /// Actual value must be greater than or equal to the limit
    Min,
    /// Actual value must be less than or equal to the limit
    Max,
}

impl Bound {
    /// Evaluates the bound against a value.
    pub fn holds(&self, actual: i64, limit: i64) -> bool {
        match self {
            Bound::Min => actual >= limit,
            Bound::Max => actual <= limit,
        }
    }

    /// Returns a human-readable name for this bound.
    pub fn name(&self) -> &'static str {
        match self {
            Bound::Min => "minimum",
            Bound::Max => "maximum",
        }
    }

    fn length_message(&self, limit: i64) -> String {
        match self {
            Bound::Min => format!("string length must be at least {limit}"),
            Bound::Max => format!("string length must be at most {limit}"),
        }
    }

    fn value_message(&self, limit: i64) -> String {
        match self {
            Bound::Min => format!("value must be greater than or equal to {limit}"),
            Bound::Max => format!("value must be less than or equal to {limit}"),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub(crate) fn evaluate(bound: Bound, limit: i64, value: &FieldValue<'_>) -> ConstraintResult {
    match value {
        FieldValue::Str(s) => {
            if bound.holds(text_length(s), limit) {
                ConstraintResult::success()
            } else {
                ConstraintResult::violated(bound.length_message(limit))
            }
        }
        FieldValue::Int(v) => {
            if bound.holds(*v, limit) {
                ConstraintResult::success()
            } else {
                ConstraintResult::violated(bound.value_message(limit))
            }
        }
        other => unsupported(bound.name(), other.kind()),
    }
}
