//! Specado Coerce - runtime schema validation and value coercion
//!
//! Given a value of unknown shape, as produced by a loosely-typed reader, and
//! a declarative [`Validator`] tree, this crate decides whether the value
//! conforms and, if so, produces its coerced, canonical form.
//!
//! ## Features
//!
//! - **Primitive coercion**: exact string grammars for integers, floats,
//!   booleans and ISO-8601 date-times
//! - **Schemas**: keyed records with closed, ignored or typed extra fields
//! - **Subtypes**: named predicates evaluated on the coerced value
//! - **Arrays and unions**: homogeneous sequences and ordered alternatives
//! - **Path-qualified errors**: every failure reports where it happened
//!
//! ## Quick Start
//!
//! ```rust
//! use specado_coerce::{validate, ExtraPolicy, Field, Validator, Value};
//! use serde_json::json;
//!
//! let person = Validator::schema(
//!     vec![
//!         Field::required("name", Validator::string()),
//!         Field::optional("age", Validator::integer()),
//!     ],
//!     ExtraPolicy::Closed,
//! );
//!
//! let raw = Value::from(json!({"name": "Bob", "age": "30"}));
//! let person_value = validate(&person, &raw, "").unwrap();
//! assert_eq!(person_value.get("age"), Some(&Value::Integer(30)));
//!
//! let err = validate(&person, &Value::from(json!({"name": 7})), "").unwrap_err();
//! assert_eq!(err.path, ".name");
//! ```
//!
//! Validation fails fast: each failed call yields exactly one
//! [`ValidationError`].
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod context;
pub mod error;
pub mod validator;
pub mod value;

// Re-export commonly used types for convenience
pub use config::{UnionErrorReporting, ValidationConfig};
pub use context::ValidationContext;
pub use error::{Error, ErrorKind, Result, ValidationError, ValidationResult};
pub use validator::{Constraint, ExtraPolicy, Field, PrimitiveKind, Validator};
pub use value::{Map, Timestamp, Value};

/// Validate `raw` against `validator` with default settings
///
/// `root_path` prefixes every reported path; it is conventionally empty.
pub fn validate(validator: &Validator, raw: &Value, root_path: &str) -> ValidationResult<Value> {
    validate_with_config(validator, raw, root_path, &ValidationConfig::default())
}

/// Validate `raw` against `validator` with explicit settings
pub fn validate_with_config(
    validator: &Validator,
    raw: &Value,
    root_path: &str,
    config: &ValidationConfig,
) -> ValidationResult<Value> {
    let span = tracing::debug_span!("validate", root_path, validator = validator.kind_name());
    let _enter = span.enter();

    let context = ValidationContext::new(root_path, config);
    let result = validator.validate_in(raw, &context);

    if let Err(err) = &result {
        log::debug!(
            "Validation failed ({}) at '{}': {}",
            err.kind,
            err.path,
            err.message
        );
    }

    result
}

/// Convert a validation outcome into the crate error type, for `?` flows
pub fn into_value(result: ValidationResult<Value>) -> Result<Value> {
    result.map_err(Error::from)
}

/// Return the coerced value or panic with the path-qualified error
///
/// This is the exception-style adapter for callers, such as test harnesses,
/// that treat a failed validation as fatal.
///
/// # Panics
///
/// When `result` is an error, panics with the [`ValidationError`] itself as
/// the payload, so a caller of [`std::panic::catch_unwind`] can recover
/// `path` and `message` with `downcast_ref::<ValidationError>()`. The error's
/// display form is logged at error level first.
pub fn unwrap_or_raise(result: ValidationResult<Value>) -> Value {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("{}", err);
            std::panic::panic_any(err)
        }
    }
}
