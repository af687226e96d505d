//! Rule annotation grammar and constraint dispatch.
//!
//! A rule annotation is a prefix, a `:` separator and a payload:
//!
//! | Rule         | Constraint                 |
//! |--------------|----------------------------|
//! | `len:<int>`  | [`Constraint::Length`]     |
//! | `in:<a,b,c>` | [`Constraint::OneOf`]      |
//! | `min:<int>`  | [`Constraint::Min`]        |
//! | `max:<int>`  | [`Constraint::Max`]        |
//!
//! Exactly one constraint is allowed per rule. The parser never trims its
//! input.

use super::bounds::{self, Bound};
use super::{length, values};
use crate::core::{ConstraintResult, FieldValue};
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

const LEN_PREFIX: &str = "len:";
const IN_PREFIX: &str = "in:";
const MIN_PREFIX: &str = "min:";
const MAX_PREFIX: &str = "max:";

/// A parsed rule annotation.
///
/// # Examples
///
/// ```rust
/// use field_guard::constraints::Constraint;
/// use field_guard::core::FieldValue;
///
/// let constraint = Constraint::parse("min:10").unwrap();
/// assert_eq!(constraint, Constraint::Min(10));
/// assert!(constraint.evaluate(&FieldValue::Int(10)).is_success());
/// assert!(constraint.evaluate(&FieldValue::Int(9)).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Constraint {
    /// Text must be exactly this many bytes long
    Length(i64),
    /// Value must equal one of the raw option tokens
    OneOf(Vec<String>),
    /// Text length or integer value must be at least this
    Min(i64),
    /// Text length or integer value must be at most this
    Max(i64),
}

impl Constraint {
    /// Parses a rule annotation, passed verbatim.
    pub fn parse(rule: &str) -> Result<Self, ParseError> {
        if let Some(arg) = rule.strip_prefix(LEN_PREFIX) {
            return parse_integer(rule, arg).map(Constraint::Length);
        }
        if let Some(arg) = rule.strip_prefix(IN_PREFIX) {
            if arg.is_empty() {
                return Err(ParseError::EmptyMembership {
                    rule: rule.to_string(),
                });
            }
            // Options stay raw; integer fields reinterpret them at evaluation.
            let options = arg.split(',').map(str::to_string).collect();
            return Ok(Constraint::OneOf(options));
        }
        if let Some(arg) = rule.strip_prefix(MIN_PREFIX) {
            return parse_integer(rule, arg).map(Constraint::Min);
        }
        if let Some(arg) = rule.strip_prefix(MAX_PREFIX) {
            return parse_integer(rule, arg).map(Constraint::Max);
        }
        Err(ParseError::InvalidSyntax {
            rule: rule.to_string(),
        })
    }

    /// Returns the name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Length(_) => length::NAME,
            Constraint::OneOf(_) => values::NAME,
            Constraint::Min(_) => Bound::Min.name(),
            Constraint::Max(_) => Bound::Max.name(),
        }
    }

    /// Returns a human-readable description of the condition.
    pub fn description(&self) -> String {
        match self {
            Constraint::Length(n) => format!("exactly {n} bytes"),
            Constraint::OneOf(options) => format!("one of [{}]", options.join(", ")),
            Constraint::Min(n) => format!("at least {n}"),
            Constraint::Max(n) => format!("at most {n}"),
        }
    }

    /// Evaluates the constraint against a field value.
    ///
    /// Dispatch is on the runtime kind of `value`; kinds a constraint does
    /// not know about yield an unsupported-type failure.
    #[instrument(level = "trace", skip_all, fields(
        constraint = %self.name(),
        value.kind = %value.kind()
    ))]
    pub fn evaluate(&self, value: &FieldValue<'_>) -> ConstraintResult {
        match self {
            Constraint::Length(n) => length::evaluate(*n, value),
            Constraint::OneOf(options) => values::evaluate(options, value),
            Constraint::Min(n) => bounds::evaluate(Bound::Min, *n, value),
            Constraint::Max(n) => bounds::evaluate(Bound::Max, *n, value),
        }
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the constraint back into rule syntax.
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Length(n) => write!(f, "{LEN_PREFIX}{n}"),
            Constraint::OneOf(options) => write!(f, "{IN_PREFIX}{}", options.join(",")),
            Constraint::Min(n) => write!(f, "{MIN_PREFIX}{n}"),
            Constraint::Max(n) => write!(f, "{MAX_PREFIX}{n}"),
        }
    }
}

fn parse_integer(rule: &str, arg: &str) -> Result<i64, ParseError> {
    arg.parse::<i64>().map_err(|_| ParseError::NotAnInteger {
        rule: rule.to_string(),
        argument: arg.to_string(),
    })
}
