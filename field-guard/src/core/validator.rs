//! Record validation: walks a record's fields and applies their rules.

use super::{FieldDescriptor, Inspect, Shape, ValidationReport};
use crate::constraints::Constraint;
use crate::error::{FieldError, GuardError, Result};
use crate::logging::{truncate_field, LogConfig};
use crate::{log_constraint, perf_debug};
use tracing::{debug, field, info, instrument, Span};

/// Configuration for a [`Validator`].
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Logging behaviour
    pub log: LogConfig,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the logging configuration.
    pub fn with_log_config(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Configuration with per-field logging enabled.
    pub fn verbose() -> Self {
        Self::new().with_log_config(LogConfig::verbose())
    }

    /// Configuration with the lowest logging overhead.
    pub fn production() -> Self {
        Self::new().with_log_config(LogConfig::production())
    }
}

/// Validates records against the rule annotations on their fields.
///
/// A validator holds only configuration, so one instance can be shared
/// freely and reused across records and threads.
///
/// # Examples
///
/// ```rust
/// use field_guard::record;
/// use field_guard::core::Validator;
///
/// record! {
///     pub struct Order {
///         pub sku: String => "len:8",
///         pub quantity: i32 => "min:1",
///         pub state: String => "in:new,paid,shipped",
///     }
/// }
///
/// let order = Order { sku: "AB-12345".into(), quantity: 0, state: "lost".into() };
/// let report = Validator::new().report(&order).unwrap();
///
/// assert_eq!(report.len(), 2);
/// assert_eq!(
///     report.to_string(),
///     "value must be greater than or equal to 1\nvalue must be one of new, paid, shipped"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `record` and returns every field failure.
    ///
    /// Fails with [`GuardError::NotAStruct`] before inspecting anything if
    /// `record` is not a record. Otherwise always returns a report, empty
    /// when every annotated field passed.
    #[instrument(skip_all, fields(record.kind = field::Empty, record.fields = field::Empty))]
    pub fn report<T: Inspect + ?Sized>(&self, record: &T) -> Result<ValidationReport> {
        let span = Span::current();
        let fields = match record.inspect() {
            Shape::Struct(fields) => fields,
            Shape::Value(found) => {
                span.record("record.kind", field::display(found));
                debug!(found = %found, "Rejected non-struct value");
                return Err(GuardError::NotAStruct { found });
            }
        };
        span.record("record.kind", "struct");
        span.record("record.fields", fields.len());

        let mut report = ValidationReport::new();
        report.metrics.total_fields = fields.len();

        for descriptor in &fields {
            if !descriptor.has_rule() {
                perf_debug!(self.config.log, field = descriptor.name, "Skipping field without rule");
                continue;
            }
            report.metrics.annotated_fields += 1;

            if let Some(failure) = self.check_field(descriptor) {
                report.add_failure(failure);
            }
        }

        if self.config.log.log_metrics {
            if report.is_success() {
                debug!(
                    fields.total = report.metrics.total_fields,
                    fields.annotated = report.metrics.annotated_fields,
                    "Record passed validation"
                );
            } else {
                info!(
                    fields.total = report.metrics.total_fields,
                    fields.annotated = report.metrics.annotated_fields,
                    fields.failed = report.metrics.failed_fields,
                    success_rate = report.metrics.success_rate(),
                    "Record failed validation"
                );
            }
        }

        Ok(report)
    }

    /// Validates `record`, folding field failures into the error.
    ///
    /// Returns `Ok(())` when every annotated field passed. The error renders
    /// as the failure messages joined by newlines, in field order.
    pub fn validate<T: Inspect + ?Sized>(&self, record: &T) -> Result<()> {
        self.report(record)?.into_result().map_err(GuardError::from)
    }

    /// Applies one field's rule; `None` means the field passed.
    fn check_field(&self, descriptor: &FieldDescriptor<'_>) -> Option<FieldError> {
        let name = descriptor.name;
        let rule = descriptor.rule;

        if !descriptor.accessible {
            log_constraint!(self.config.log, field = name, rule, "Rule on non-public field");
            return Some(FieldError::not_accessible(name));
        }

        let constraint = match Constraint::parse(rule) {
            Ok(constraint) => constraint,
            Err(e) => {
                log_constraint!(self.config.log, field = name, rule, error = %e, "Invalid rule");
                return Some(FieldError::from_parse(name, &e));
            }
        };

        let result = constraint.evaluate(&descriptor.value);

        if self.config.log.log_field_values {
            log_constraint!(
                self.config.log,
                field = name,
                constraint = %constraint,
                condition = %constraint.description(),
                value = %truncate_field(&descriptor.value.to_string(), self.config.log.max_field_length),
                status = ?result.status(),
                "Evaluated field"
            );
        } else {
            log_constraint!(
                self.config.log,
                field = name,
                constraint = %constraint,
                condition = %constraint.description(),
                value.kind = %descriptor.value.kind(),
                status = ?result.status(),
                "Evaluated field"
            );
        }

        result.into_field_error(name)
    }
}

/// Validates `record` with the default configuration.
///
/// # Examples
///
/// ```rust
/// use field_guard::{record, validate};
///
/// record! {
///     pub struct User {
///         pub name: String => "min:2",
///         pub age: i64 => "max:150",
///     }
/// }
///
/// assert!(validate(&User { name: "Ann".into(), age: 40 }).is_ok());
///
/// let err = validate(&User { name: "A".into(), age: 200 }).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "string length must be at least 2\nvalue must be less than or equal to 150"
/// );
///
/// assert!(validate(&42i64).unwrap_err().is_not_a_struct());
/// ```
pub fn validate<T: Inspect + ?Sized>(record: &T) -> Result<()> {
    Validator::new().validate(record)
}

/// Validates `record` with the default configuration and returns the report.
pub fn validate_report<T: Inspect + ?Sized>(record: &T) -> Result<ValidationReport> {
    Validator::new().report(record)
}
