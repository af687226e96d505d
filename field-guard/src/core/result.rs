//! Validation result types.

use crate::error::{FieldError, FieldErrorKind, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts collected while validating one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    /// Number of fields the record declares
    pub total_fields: usize,
    /// Number of fields carrying a non-empty rule annotation
    pub annotated_fields: usize,
    /// Number of annotated fields that failed
    pub failed_fields: usize,
}

impl ValidationMetrics {
    /// Creates new validation metrics with all counts set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the share of annotated fields that passed as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.annotated_fields == 0 {
            100.0
        } else {
            let passed = self.annotated_fields - self.failed_fields;
            (passed as f64 / self.annotated_fields as f64) * 100.0
        }
    }
}

/// The outcome of validating one record.
///
/// Holds one [`FieldError`] per failed field, in field declaration order.
/// An empty report means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Counts for the validated record
    pub metrics: ValidationMetrics,
    /// Failures in field declaration order
    pub failures: ValidationErrors,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a failure to the report.
    pub fn add_failure(&mut self, failure: FieldError) {
        self.metrics.failed_fields += 1;
        self.failures.push(failure);
    }

    /// Returns true if no field failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Gets all failures of a specific kind.
    pub fn failures_by_kind(&self, kind: FieldErrorKind) -> Vec<&FieldError> {
        self.failures.of_kind(kind)
    }

    /// Returns the failure recorded for `field`, if any.
    pub fn failure_for(&self, field: &str) -> Option<&FieldError> {
        self.failures.iter().find(|f| f.field() == field)
    }

    /// Converts the report into `Ok(())` when empty, or the failures otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.failures)
        }
    }

    /// Formats the report as JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use field_guard::core::ValidationReport;
    ///
    /// let json = ValidationReport::new().to_json().unwrap();
    /// assert!(json.contains("\"failures\":[]"));
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Formats the report as JSON with pretty printing.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Renders the failure messages joined by newlines.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.failures)
    }
}
