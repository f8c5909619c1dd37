//! Primitive coercers
//!
//! Each primitive accepts its canonical representation unchanged and, where
//! a coercion exists, a string matching an exact grammar:
//!
//! - integer: `[+-]?[0-9]+`, within `i64`
//! - float: `[+-]?([0-9]+(.[0-9]*)?|.[0-9]+)([eE][+-]?[0-9]+)?`, finite
//! - boolean: `true` or `false`
//! - datetime: `YYYY-MM-DD` then `T` or a space, `HH:MM[:SS[.fraction]]`,
//!   then an optional `Z` or `±HH:MM` offset, which the result keeps
//!
//! No surrounding whitespace is tolerated by any grammar.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use super::PrimitiveKind;
use crate::context::ValidationContext;
use crate::error::{ValidationError, ValidationResult};
use crate::value::{Timestamp, Value};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

static INTEGER_REGEX: OnceLock<Regex> = OnceLock::new();
static FLOAT_REGEX: OnceLock<Regex> = OnceLock::new();
static TEMPORAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn integer_regex() -> &'static Regex {
    INTEGER_REGEX.get_or_init(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer grammar"))
}

fn float_regex() -> &'static Regex {
    FLOAT_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").expect("float grammar")
    })
}

fn temporal_regex() -> &'static Regex {
    TEMPORAL_REGEX.get_or_init(|| {
        Regex::new(
            r"^([0-9]{4})-([0-9]{2})-([0-9]{2})[T ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?(Z|[+-][0-9]{2}:[0-9]{2})?$",
        )
        .expect("datetime grammar")
    })
}

/// Parse a base-10 integer over the whole string
pub fn parse_integer(input: &str) -> Option<i64> {
    if !integer_regex().is_match(input) {
        return None;
    }
    input.parse().ok()
}

/// Parse a decimal floating literal over the whole string
pub fn parse_float(input: &str) -> Option<f64> {
    if !float_regex().is_match(input) {
        return None;
    }
    input.parse::<f64>().ok().filter(|f| f.is_finite())
}

pub fn parse_boolean(input: &str) -> Option<bool> {
    match input {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse an ISO-8601 date-time with a mandatory time of day
///
/// The result holds the wall-clock fields as written, together with the
/// offset when one is given.
pub fn parse_temporal(input: &str) -> Option<Timestamp> {
    let caps = temporal_regex().captures(input)?;
    let number = |i: usize| -> Option<u32> {
        caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(2)?, number(3)?)?;

    let nanos = match caps.get(7) {
        Some(fraction) => format!("{:0<9}", fraction.as_str()).parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(number(4)?, number(5)?, number(6)?, nanos)?;

    let local = NaiveDateTime::new(date, time);
    match caps.get(8).map(|m| m.as_str()) {
        None => Some(Timestamp::naive(local)),
        Some("Z") => Some(Timestamp::with_offset(local, FixedOffset::east_opt(0)?)),
        Some(offset) => Some(Timestamp::with_offset(local, parse_offset(offset)?)),
    }
}

/// `±HH:MM`, hours up to 23
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let hours: i32 = offset.get(1..3)?.parse().ok()?;
    let minutes: i32 = offset.get(4..6)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    let seconds = hours * 3600 + minutes * 60;
    if offset.starts_with('-') {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }
}

pub(crate) fn validate(
    kind: PrimitiveKind,
    raw: &Value,
    context: &ValidationContext<'_>,
) -> ValidationResult<Value> {
    let coerce = |parsed: Option<Value>, input: &str| {
        parsed.ok_or_else(|| ValidationError::coercion(context.path.as_str(), input, kind.name()))
    };

    match (kind, raw) {
        (PrimitiveKind::Any, _)
        | (PrimitiveKind::String, Value::String(_))
        | (PrimitiveKind::Integer, Value::Integer(_))
        | (PrimitiveKind::Float, Value::Float(_))
        | (PrimitiveKind::Boolean, Value::Boolean(_))
        | (PrimitiveKind::Null, Value::Null)
        | (PrimitiveKind::Temporal, Value::Temporal(_)) => Ok(raw.clone()),

        (PrimitiveKind::Float, Value::Integer(i)) => Ok(Value::Float(*i as f64)),

        (PrimitiveKind::Integer, Value::String(s)) => coerce(parse_integer(s).map(Value::Integer), s),
        (PrimitiveKind::Float, Value::String(s)) => coerce(parse_float(s).map(Value::Float), s),
        (PrimitiveKind::Boolean, Value::String(s)) => coerce(parse_boolean(s).map(Value::Boolean), s),
        (PrimitiveKind::Temporal, Value::String(s)) => {
            coerce(parse_temporal(s).map(Value::Temporal), s)
        }

        (kind, other) => Err(ValidationError::type_mismatch(
            context.path.as_str(),
            kind.name(),
            other.type_name(),
        )),
    }
}
