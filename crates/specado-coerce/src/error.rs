//! Error types for validation and coercion
//!
//! Every failed validation surfaces exactly one [`ValidationError`], qualified
//! by the path at which the failure was detected. The crate-level [`Error`]
//! wraps it together with the failures of the I/O-facing helpers (reading
//! values and configuration from text).
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value's tag does not match what the validator expects
    TypeMismatch,
    /// A string was given but its content does not parse into the target
    Coercion,
    /// A non-optional schema field is absent
    MissingField,
    /// A closed schema received an undeclared key
    ExtraField,
    /// A subtype predicate returned false
    Constraint,
    /// No alternative of a union matched
    UnionExhausted,
    /// The input nests deeper than the configured limit
    DepthExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::Coercion => "coercion failure",
            ErrorKind::MissingField => "missing field",
            ErrorKind::ExtraField => "extra field",
            ErrorKind::Constraint => "constraint failure",
            ErrorKind::UnionExhausted => "union exhausted",
            ErrorKind::DepthExceeded => "depth exceeded",
        };
        f.write_str(label)
    }
}

/// Validation failure with path context
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location of the failure, e.g. `.people[1].age`
    pub path: String,
    /// Human-readable error message
    pub message: String,
    /// Taxonomy of the failure
    pub kind: ErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.path.is_empty() { "<root>" } else { &self.path };
        write!(f, "Validation error at '{}': {}", location, self.message)
    }
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<P, M>(kind: ErrorKind, path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            path,
            format!("expected {}, got {}", expected, actual),
        )
    }

    pub fn coercion(path: impl Into<String>, input: &str, target: &str) -> Self {
        Self::new(
            ErrorKind::Coercion,
            path,
            format!("cannot coerce {:?} to {}", input, target),
        )
    }

    pub fn missing_field(path: impl Into<String>, name: &str) -> Self {
        Self::new(
            ErrorKind::MissingField,
            path,
            format!("required field '{}' is missing", name),
        )
    }

    /// Error naming every disallowed key, in input order
    pub fn extra_fields(path: impl Into<String>, keys: &[&str]) -> Self {
        let listed = keys
            .iter()
            .map(|k| format!("'{}'", k))
            .collect::<Vec<_>>()
            .join(", ");
        let noun = if keys.len() == 1 { "field" } else { "fields" };
        Self::new(
            ErrorKind::ExtraField,
            path,
            format!("unexpected {} {}", noun, listed),
        )
    }

    pub fn constraint(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Constraint, path, message)
    }

    pub fn depth_exceeded(path: impl Into<String>, max_depth: usize) -> Self {
        Self::new(
            ErrorKind::DepthExceeded,
            path,
            format!("maximum validation depth of {} exceeded", max_depth),
        )
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Main error type for the crate's fallible helpers
#[derive(Error, Debug)]
pub enum Error {
    /// A value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON parsing errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration or validator construction
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// The validation failure carried by this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_path() {
        let err = ValidationError::missing_field(".person.name", "name");
        assert_eq!(
            err.to_string(),
            "Validation error at '.person.name': required field 'name' is missing"
        );
    }

    #[test]
    fn test_display_at_root() {
        let err = ValidationError::type_mismatch("", "object", "string");
        assert_eq!(err.to_string(), "Validation error at '<root>': expected object, got string");
    }

    #[test]
    fn test_extra_fields_lists_every_key() {
        let err = ValidationError::extra_fields("", &["a", "b"]);
        assert_eq!(err.kind, ErrorKind::ExtraField);
        assert_eq!(err.message, "unexpected fields 'a', 'b'");

        let single = ValidationError::extra_fields("", &["extra"]);
        assert_eq!(single.message, "unexpected field 'extra'");
    }

    #[test]
    fn test_error_wraps_validation_error() {
        let inner = ValidationError::constraint(".age", "must be positive");
        let err: Error = inner.clone().into();
        assert_eq!(err.as_validation(), Some(&inner));
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::UnionExhausted).unwrap();
        assert_eq!(json, "\"union_exhausted\"");
    }
}
