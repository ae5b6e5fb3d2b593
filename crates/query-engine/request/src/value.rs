//! Scalar values carried by search terms and conditions.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scalar value supplied by a caller.
///
/// Inbound JSON is converted explicitly: arrays and objects are rejected, integers that fit
/// an `i64` stay integers and every other number becomes a float. `Timestamp` is never produced
/// by deserialization, only by [`Value::coerce_timestamp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Timestamp(DateTime<Utc>),
}

/// A JSON value that has no scalar counterpart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("array values are not supported here")]
    Array,
    #[error("object values are not supported here")]
    Object,
    #[error("the number {0} cannot be represented")]
    Number(String),
}

impl Value {
    /// Parse an RFC 3339 string into a timestamp. Anything else, including strings that do not
    /// parse, is returned unchanged.
    #[must_use]
    pub fn coerce_timestamp(self) -> Value {
        match self {
            Value::String(text) => match DateTime::parse_from_rfc3339(&text) {
                Ok(timestamp) => Value::Timestamp(timestamp.with_timezone(&Utc)),
                Err(_) => Value::String(text),
            },
            other => other,
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(num) => match num.as_i64() {
                Some(int) => Ok(Value::Int(int)),
                None => num
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| ValueError::Number(num.to_string())),
            },
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(_) => Err(ValueError::Array),
            serde_json::Value::Object(_) => Err(ValueError::Object),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(int) => serde_json::Value::from(int),
            Value::Float(float) => serde_json::Number::from_f64(float)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
            Value::Timestamp(timestamp) => serde_json::Value::String(
                timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
        }
    }
}

/// The textual form used when a value is embedded in a search pattern.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(int) => write!(f, "{int}"),
            Value::Float(float) => write!(f, "{float}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Timestamp(timestamp) => write!(
                f,
                "{}",
                timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            ),
        }
    }
}
