//! Subtype validation: a base validator gated by named predicates
//!
//! Constraints run in declaration order against the base-coerced value and
//! stop at the first failure. They never transform the value.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::{Constraint, Validator};
use crate::context::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::value::Value;

pub(crate) fn validate(
    base: &Validator,
    constraints: &[Constraint],
    raw: &Value,
    context: &ValidationContext<'_>,
) -> ValidationResult<Value> {
    let value = base.validate_in(raw, context)?;

    match constraints.iter().find(|constraint| !constraint.check(&value)) {
        Some(failed) => Err(ValidationError::constraint(
            context.path.as_str(),
            failed.message(),
        )),
        None => Ok(value),
    }
}
