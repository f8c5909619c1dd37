//! Validator algebra
//!
//! A [`Validator`] is an immutable, stateless rule that checks a [`Value`]
//! and produces its coerced form. Validators compose: schemas hold field
//! validators, subtypes wrap a base, arrays apply an element validator and
//! unions try alternatives in order.
//!
//! The algebra is organized into focused modules:
//! - `primitive`: scalar coercers and their string grammars
//! - `subtype`: named predicates gating a base validator
//! - `array`: homogeneous sequences
//! - `union`: ordered alternatives, first match wins
//! - `schema`: keyed records with an extra-field policy
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod primitive;
pub mod schema;
pub mod subtype;
pub mod union;


use crate::context::ValidationContext;
use crate::error::{Error, Result, ValidationResult};
use crate::value::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Scalar validator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Any,
    Temporal,
}

impl PrimitiveKind {
    /// Name used in type-mismatch diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Any => "any",
            PrimitiveKind::Temporal => "datetime",
        }
    }
}

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Named predicate evaluated on a coerced value
#[derive(Clone)]
pub struct Constraint {
    message: String,
    predicate: Arc<Predicate>,
}

impl Constraint {
    pub fn new<M, F>(message: M, predicate: F) -> Self
    where
        M: Into<String>,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Message reported when the predicate fails
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Declared schema field
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub validator: Validator,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, validator: Validator, optional: bool) -> Self {
        Self {
            name: name.into(),
            validator,
            optional,
        }
    }

    pub fn required(name: impl Into<String>, validator: Validator) -> Self {
        Self::new(name, validator, false)
    }

    pub fn optional(name: impl Into<String>, validator: Validator) -> Self {
        Self::new(name, validator, true)
    }
}

/// Treatment of keys a schema does not declare
#[derive(Debug, Clone)]
pub enum ExtraPolicy {
    /// Undeclared keys are an error
    Closed,
    /// Undeclared keys are dropped from the result
    Ignored,
    /// Undeclared keys must pass the validator and are kept
    Typed(Arc<Validator>),
}

impl ExtraPolicy {
    pub fn typed(validator: Validator) -> Self {
        ExtraPolicy::Typed(Arc::new(validator))
    }
}

/// Immutable validation rule
///
/// Children are shared behind `Arc`, so cloning a validator is cheap and a
/// named validator can appear inside many trees.
#[derive(Debug, Clone)]
pub enum Validator {
    Primitive(PrimitiveKind),
    Schema {
        fields: Arc<[Field]>,
        extra: ExtraPolicy,
    },
    Subtype {
        base: Arc<Validator>,
        constraints: Arc<[Constraint]>,
    },
    Array {
        element: Arc<Validator>,
    },
    Union {
        alternatives: Arc<[Validator]>,
    },
}

impl Validator {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Validator::Primitive(kind)
    }

    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    pub fn integer() -> Self {
        Self::primitive(PrimitiveKind::Integer)
    }

    pub fn float() -> Self {
        Self::primitive(PrimitiveKind::Float)
    }

    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub fn null() -> Self {
        Self::primitive(PrimitiveKind::Null)
    }

    pub fn any() -> Self {
        Self::primitive(PrimitiveKind::Any)
    }

    pub fn temporal() -> Self {
        Self::primitive(PrimitiveKind::Temporal)
    }

    /// Build a schema; a repeated field name keeps its first declaration
    pub fn schema(fields: Vec<Field>, extra: ExtraPolicy) -> Self {
        let mut seen = HashSet::new();
        let fields: Vec<Field> = fields
            .into_iter()
            .filter(|field| {
                let first = seen.insert(field.name.clone());
                if !first {
                    log::warn!("Duplicate schema field '{}' ignored", field.name);
                }
                first
            })
            .collect();

        Validator::Schema {
            fields: fields.into(),
            extra,
        }
    }

    /// Build a schema, rejecting repeated field names
    pub fn try_schema(fields: Vec<Field>, extra: ExtraPolicy) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = fields.iter().find(|f| !seen.insert(f.name.as_str())) {
            return Err(Error::configuration(format!(
                "duplicate schema field '{}'",
                duplicate.name
            )));
        }

        Ok(Validator::Schema {
            fields: fields.into(),
            extra,
        })
    }

    pub fn subtype(base: Validator, constraints: Vec<Constraint>) -> Self {
        Validator::Subtype {
            base: Arc::new(base),
            constraints: constraints.into(),
        }
    }

    pub fn array(element: Validator) -> Self {
        Validator::Array {
            element: Arc::new(element),
        }
    }

    /// Build a union; at least one alternative is required
    pub fn union(alternatives: Vec<Validator>) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(Error::configuration("union requires at least one alternative"));
        }

        Ok(Validator::Union {
            alternatives: alternatives.into(),
        })
    }

    /// Short label for logging and diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Validator::Primitive(kind) => kind.name(),
            Validator::Schema { .. } => "schema",
            Validator::Subtype { .. } => "subtype",
            Validator::Array { .. } => "array",
            Validator::Union { .. } => "union",
        }
    }

    /// Validate `raw` with default settings, rooted at `path`
    pub fn validate(&self, raw: &Value, path: &str) -> ValidationResult<Value> {
        crate::validate(self, raw, path)
    }

    pub(crate) fn validate_in(
        &self,
        raw: &Value,
        context: &ValidationContext<'_>,
    ) -> ValidationResult<Value> {
        log::trace!("Validating {} at '{}'", self.kind_name(), context.path);

        match self {
            Validator::Primitive(kind) => primitive::validate(*kind, raw, context),
            Validator::Schema { fields, extra } => schema::validate(fields, extra, raw, context),
            Validator::Subtype { base, constraints } => {
                subtype::validate(base, constraints, raw, context)
            }
            Validator::Array { element } => array::validate(element, raw, context),
            Validator::Union { alternatives } => union::validate(alternatives, raw, context),
        }
    }
}
