//! # field-guard - tag-driven validation for Rust records
//!
//! field-guard validates the fields of a record against compact rule
//! annotations such as `"len:5"` or `"in:admin,user"`, and reports every
//! failing field at once instead of stopping at the first.
//!
//! ## Quick Start
//!
//! ```rust
//! use field_guard::prelude::*;
//!
//! record! {
//!     #[derive(Debug)]
//!     pub struct User {
//!         pub id: String => "len:8",
//!         pub age: i64 => "min:18",
//!         pub role: String => "in:admin,user,guest",
//!         pub bio: String,
//!     }
//! }
//!
//! let user = User {
//!     id: "u-000042".to_string(),
//!     age: 16,
//!     role: "root".to_string(),
//!     bio: String::new(),
//! };
//!
//! match validate(&user) {
//!     Ok(()) => println!("valid"),
//!     Err(GuardError::Invalid(errors)) => {
//!         for error in &errors {
//!             println!("{}: {}", error.field(), error);
//!         }
//!         assert_eq!(errors.len(), 2);
//!     }
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```
//!
//! ## Rules
//!
//! | Rule        | Text fields              | Integer fields          |
//! |-------------|--------------------------|-------------------------|
//! | `len:<n>`   | exactly `n` bytes        | unsupported             |
//! | `in:<a,b>`  | equals one option        | equals one option       |
//! | `min:<n>`   | at least `n` bytes       | `>= n`                  |
//! | `max:<n>`   | at most `n` bytes        | `<= n`                  |
//!
//! Any other field type (floats, booleans, collections, nested records)
//! makes a rule fail as unsupported. A rule on a non-public field always
//! fails without being parsed.
//!
//! ## Errors
//!
//! Validation returns [`GuardError::NotAStruct`] when handed something
//! other than a record, and [`GuardError::Invalid`] with the ordered
//! per-field [`ValidationErrors`](error::ValidationErrors) otherwise. The
//! latter renders as the failure messages joined by newlines.
//!
//! ## Observability
//!
//! Every call runs inside a `tracing` span. Per-field events are controlled
//! through [`LogConfig`](logging::LogConfig) on a
//! [`Validator`](core::Validator); see [`logging::setup`] for a ready-made
//! subscriber.
//!
//! ## Architecture
//!
//! - **`core`**: record binding layer, the validator and result types
//! - **`constraints`**: rule parsing and the built-in constraints
//! - **`error`**: error taxonomy
//! - **`logging`**: logging configuration and setup

pub mod constraints;
pub mod core;
pub mod error;
pub mod logging;
pub mod prelude;

pub use crate::core::{validate, validate_report, Validator};
pub use crate::error::{GuardError, Result};
