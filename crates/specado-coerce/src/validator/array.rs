//! Homogeneous array validation
//!
//! Elements are validated left to right; the first failing index decides the
//! reported error.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::Validator;
use crate::context::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::value::Value;

pub(crate) fn validate(
    element: &Validator,
    raw: &Value,
    context: &ValidationContext<'_>,
) -> ValidationResult<Value> {
    let items = match raw {
        Value::Sequence(items) => items,
        other => {
            return Err(ValidationError::type_mismatch(
                context.path.as_str(),
                "array",
                other.type_name(),
            ))
        }
    };

    let mut coerced = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let child = context.child_index(index)?;
        coerced.push(element.validate_in(item, &child)?);
    }

    Ok(Value::Sequence(coerced))
}
