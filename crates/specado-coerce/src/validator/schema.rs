//! Schema validation for keyed records
//!
//! Declared fields are validated in declaration order, then the keys the
//! schema does not declare ("extras") are handled by the [`ExtraPolicy`]:
//!
//! - **Closed**: any extra is an error naming every offending key
//! - **Ignored**: extras are dropped
//! - **Typed**: each extra must pass the extra validator and is kept
//!
//! The result holds declared fields in declaration order followed by kept
//! extras in input order.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::{ExtraPolicy, Field};
use crate::context::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::value::{Map, Value};
use std::collections::HashSet;

pub(crate) fn validate(
    fields: &[Field],
    extra: &ExtraPolicy,
    raw: &Value,
    context: &ValidationContext<'_>,
) -> ValidationResult<Value> {
    let input = match raw {
        Value::Mapping(map) => map,
        other => {
            return Err(ValidationError::type_mismatch(
                context.path.as_str(),
                "object",
                other.type_name(),
            ))
        }
    };

    let mut result = Map::with_capacity(fields.len());

    for field in fields {
        match input.get(&field.name) {
            Some(value) => {
                let child = context.child(&field.name)?;
                let coerced = field.validator.validate_in(value, &child)?;
                result.insert(field.name.clone(), coerced);
            }
            None if field.optional => {}
            None => {
                return Err(ValidationError::missing_field(
                    context.key_path(&field.name),
                    &field.name,
                ))
            }
        }
    }

    let declared: HashSet<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    let extras: Vec<(&str, &Value)> = input
        .iter()
        .filter(|(key, _)| !declared.contains(key))
        .collect();

    match extra {
        ExtraPolicy::Closed => {
            if !extras.is_empty() {
                let keys: Vec<&str> = extras.iter().map(|(key, _)| *key).collect();
                return Err(ValidationError::extra_fields(context.path.as_str(), &keys));
            }
        }
        ExtraPolicy::Ignored => {
            if !extras.is_empty() {
                log::trace!(
                    "Dropping {} undeclared field(s) at '{}'",
                    extras.len(),
                    context.path
                );
            }
        }
        ExtraPolicy::Typed(validator) => {
            for (key, value) in extras {
                let child = context.child(key)?;
                let coerced = validator.validate_in(value, &child)?;
                result.insert(key, coerced);
            }
        }
    }

    Ok(Value::Mapping(result))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::validator::{ExtraPolicy, Field, Validator};
    use crate::value::{Map, Value};
    use serde_json::json;

    fn person(extra: ExtraPolicy) -> Validator {
        Validator::schema(
            vec![
                Field::required("name", Validator::string()),
                Field::optional("age", Validator::integer()),
            ],
            extra,
        )
    }

    #[test]
    fn test_rejects_non_mapping() {
        let validator = person(ExtraPolicy::Closed);
        for raw in [Value::from("not-an-object"), Value::Null, Value::Sequence(Vec::new())] {
            let err = validator.validate(&raw, "").unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
            assert_eq!(err.path, "");
        }
    }

    #[test]
    fn test_missing_required_field_path() {
        let validator = person(ExtraPolicy::Closed);
        let err = validator
            .validate(&Value::from(json!({"age": 3})), ".owner")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
        assert_eq!(err.path, ".owner.name");
    }

    #[test]
    fn test_fields_fail_in_declaration_order() {
        let validator = Validator::schema(
            vec![
                Field::required("x1", Validator::integer()),
                Field::required("x2", Validator::integer()),
            ],
            ExtraPolicy::Closed,
        );
        let err = validator
            .validate(&Value::from(json!({"x2": "bad", "x1": "bad"})), "")
            .unwrap_err();
        assert_eq!(err.path, ".x1");
    }

    #[test]
    fn test_closed_names_every_extra_key() {
        let validator = person(ExtraPolicy::Closed);
        let err = validator
            .validate(&Value::from(json!({"name": "A", "zeta": 1, "alpha": 2})), "")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExtraField);
        assert_eq!(err.message, "unexpected fields 'zeta', 'alpha'");
    }

    #[test]
    fn test_field_errors_win_over_extra_errors() {
        let validator = person(ExtraPolicy::Closed);
        let err = validator
            .validate(&Value::from(json!({"name": 1, "extra": "x"})), "")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.path, ".name");
    }

    #[test]
    fn test_ignored_drops_extras() {
        let validator = person(ExtraPolicy::Ignored);
        let result = validator
            .validate(&Value::from(json!({"name": "Alice", "extra": "ignored"})), "")
            .unwrap();
        assert_eq!(result, Value::from(json!({"name": "Alice"})));
    }

    #[test]
    fn test_typed_extras_are_coerced_in_input_order() {
        let validator = Validator::schema(
            vec![Field::required("name", Validator::string())],
            ExtraPolicy::typed(Validator::integer()),
        );
        let result = validator
            .validate(&Value::from(json!({"score": "100", "name": "Alice", "age": "30"})), "")
            .unwrap();
        let keys: Vec<&str> = result.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "score", "age"]);
        assert_eq!(result.get("age"), Some(&Value::Integer(30)));

        let err = validator
            .validate(&Value::from(json!({"name": "Alice", "bad": "not-int"})), "")
            .unwrap_err();
        assert_eq!(err.path, ".bad");
        assert_eq!(err.kind, ErrorKind::Coercion);
    }

    #[test]
    fn test_typed_extras_over_many_keys() {
        let count = 40_000;
        let raw: Map = (0..count)
            .map(|i| (format!("k{}", i), Value::String(i.to_string())))
            .collect();

        let validator = Validator::schema(Vec::new(), ExtraPolicy::typed(Validator::integer()));
        let result = validator.validate(&Value::Mapping(raw), "").unwrap();

        let map = result.as_mapping().unwrap();
        assert_eq!(map.len(), count);
        assert_eq!(map.keys().last(), Some("k39999"));
        assert_eq!(map.get("k1234"), Some(&Value::Integer(1234)));
    }

    #[test]
    fn test_duplicate_fields() {
        let fields = vec![
            Field::required("id", Validator::integer()),
            Field::required("id", Validator::string()),
        ];
        assert!(Validator::try_schema(fields.clone(), ExtraPolicy::Closed).is_err());

        let validator = Validator::schema(fields, ExtraPolicy::Closed);
        let result = validator.validate(&Value::from(json!({"id": "7"})), "").unwrap();
        assert_eq!(result, Value::from(json!({"id": 7})));
    }
}
