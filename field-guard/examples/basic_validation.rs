//! Basic record validation.
//!
//! Run with `cargo run --example basic_validation`. Set `RUST_LOG` to change
//! the log filter, e.g. `RUST_LOG=field_guard=trace`.

use field_guard::core::ValidatorConfig;
use field_guard::logging::setup::{init_logging, LoggingConfig};
use field_guard::prelude::*;
use tracing::Level;

record! {
    #[derive(Debug)]
    pub struct Signup {
        pub username: String => "min:3",
        pub country: String => "len:2",
        pub plan: String => "in:free,pro,team",
        pub age: i32 => "min:13",
        pub seats: i32 => "in:1,5,10",
        pub referral: String,
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging(
        LoggingConfig::default()
            .with_level(Level::WARN)
            .with_crate_level(Level::DEBUG),
    )?;

    let signups = [
        Signup {
            username: "marta".to_string(),
            country: "PL".to_string(),
            plan: "pro".to_string(),
            age: 34,
            seats: 5,
            referral: String::new(),
        },
        Signup {
            username: "jo".to_string(),
            country: "POL".to_string(),
            plan: "enterprise".to_string(),
            age: 11,
            seats: 3,
            referral: "newsletter".to_string(),
        },
    ];

    let validator = Validator::with_config(ValidatorConfig::verbose());

    for signup in &signups {
        let report = validator.report(signup)?;
        if report.is_success() {
            println!("{} is valid", signup.username);
            continue;
        }

        println!("{} has {} problem(s):", signup.username, report.len());
        for failure in &report.failures {
            println!("  {:<10} [{}] {}", failure.field(), failure.kind(), failure);
        }
        println!("{}", report.to_json_pretty()?);
    }

    // Anything that is not a record is rejected up front
    if let Err(e) = validate(&vec![1, 2, 3]) {
        println!("{e}");
    }

    Ok(())
}
