//! Union validation: ordered alternatives, first success wins
//!
//! Declaration order is significant. `[integer, string]` turns `"42"` into
//! `42`, while `[string, integer]` keeps it as `"42"`. Once an alternative
//! succeeds its result is final.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::Validator;
use crate::config::UnionErrorReporting;
use crate::context::ValidationContext;
use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::value::Value;

const NO_MATCH: &str = "no union variant matched";

pub(crate) fn validate(
    alternatives: &[Validator],
    raw: &Value,
    context: &ValidationContext<'_>,
) -> ValidationResult<Value> {
    let mut failures = Vec::with_capacity(alternatives.len());

    for (index, alternative) in alternatives.iter().enumerate() {
        match alternative.validate_in(raw, context) {
            Ok(value) => return Ok(value),
            // Depth exhaustion is a property of the input, not of the variant
            Err(err) if err.kind == ErrorKind::DepthExceeded => return Err(err),
            Err(err) => {
                log::debug!(
                    "Union variant {} ({}) rejected value at '{}': {}",
                    index,
                    alternative.kind_name(),
                    context.path,
                    err.message
                );
                failures.push((alternative.kind_name(), err));
            }
        }
    }

    let message = match context.config.union_errors {
        UnionErrorReporting::Summary => NO_MATCH.to_string(),
        UnionErrorReporting::Detailed => {
            let reasons = failures
                .iter()
                .enumerate()
                .map(|(index, (kind, err))| describe(index, kind, err, context))
                .collect::<Vec<_>>()
                .join("; ");
            format!("{} ({})", NO_MATCH, reasons)
        }
    };

    Err(ValidationError::new(
        ErrorKind::UnionExhausted,
        context.path.as_str(),
        message,
    ))
}

fn describe(index: usize, kind: &str, err: &ValidationError, context: &ValidationContext<'_>) -> String {
    if err.path == context.path {
        format!("variant {} ({}): {}", index, kind, err.message)
    } else {
        format!("variant {} ({}): at '{}': {}", index, kind, err.path, err.message)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{UnionErrorReporting, ValidationConfig};
    use crate::error::ErrorKind;
    use crate::validator::{ExtraPolicy, Field, Validator};
    use crate::value::Value;
    use crate::validate_with_config;
    use serde_json::json;

    #[test]
    fn test_first_success_wins() {
        let int_first = Validator::union(vec![Validator::integer(), Validator::string()]).unwrap();
        let str_first = Validator::union(vec![Validator::string(), Validator::integer()]).unwrap();

        assert_eq!(int_first.validate(&Value::from("42"), "").unwrap(), Value::Integer(42));
        assert_eq!(str_first.validate(&Value::from("42"), "").unwrap(), Value::from("42"));
        assert_eq!(int_first.validate(&Value::from("hello"), "").unwrap(), Value::from("hello"));
    }

    #[test]
    fn test_detailed_failure_lists_every_variant() {
        let validator = Validator::union(vec![Validator::integer(), Validator::string()]).unwrap();
        let err = validator.validate(&Value::Boolean(true), ".flag").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnionExhausted);
        assert_eq!(err.path, ".flag");
        assert_eq!(
            err.message,
            "no union variant matched (variant 0 (integer): expected integer, got boolean; \
             variant 1 (string): expected string, got boolean)"
        );
    }

    #[test]
    fn test_detailed_failure_mentions_nested_paths() {
        let schema = Validator::schema(
            vec![Field::required("id", Validator::integer())],
            ExtraPolicy::Closed,
        );
        let validator = Validator::union(vec![schema, Validator::null()]).unwrap();
        let err = validator
            .validate(&Value::from(json!({"id": "x"})), "")
            .unwrap_err();
        assert!(err.message.contains("at '.id'"), "{}", err.message);
    }

    #[test]
    fn test_summary_failure() {
        let config = ValidationConfig::default().with_union_errors(UnionErrorReporting::Summary);
        let validator = Validator::union(vec![Validator::integer(), Validator::null()]).unwrap();
        let err = validate_with_config(&validator, &Value::from("abc"), "", &config).unwrap_err();
        assert_eq!(err.message, "no union variant matched");
    }

    #[test]
    fn test_empty_union_is_rejected() {
        assert!(Validator::union(Vec::new()).is_err());
    }

    #[test]
    fn test_depth_error_is_not_masked() {
        let config = ValidationConfig::default().with_max_depth(1);
        let nested = Validator::array(Validator::array(Validator::any()));
        let validator = Validator::union(vec![nested, Validator::any()]).unwrap();
        let err = validate_with_config(&validator, &Value::from(json!([[1]])), "", &config)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DepthExceeded);
    }
}
