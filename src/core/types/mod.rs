//! # Core Types Module
//!
//! Scalar types shared by samples and recorders.
//!
//! ## Key Types
//!
//! * `Value` - The coerced scalar stored with every sample, either a number or a boolean
//!
//! ## Example
//!
//! ```rust
//! use resource_metric::core::types::Value;
//!
//! let v = Value::from(true);
//! assert_eq!(v.as_f64(), 1.0);
//! assert_eq!(v.kind(), "boolean");
//! ```

use std::fmt;

use serde_json::Value as JsonValue;

use crate::error::ValidationError;

/// A recorded scalar: exactly one of number or boolean
///
/// # Examples
///
/// ```rust
/// use resource_metric::core::types::Value;
///
/// let n = Value::Number(2.5);
/// assert_eq!(n, 2.5);
/// assert_eq!(n.as_bool(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
}

impl Value {
    /// Returns the value as a float, booleans coercing to `1.0` / `0.0`
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Number(n) => n,
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) => 0.0,
        }
    }

    /// Returns the boolean if this is a boolean sample
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(b) => Some(b),
            Value::Number(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Name of the scalar kind, `"number"` or `"boolean"`
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
        }
    }
}

/// Kind name used in `UnsupportedValueType` errors
pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = ValidationError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Bool(b) => Ok(Value::Boolean(*b)),
            // Without arbitrary_precision every JSON number fits in an f64.
            JsonValue::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or(ValidationError::UnsupportedValueType("number")),
            other => Err(ValidationError::UnsupportedValueType(json_kind(other))),
        }
    }
}

/// NaN and the infinities have no JSON form and become `null`
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => JsonValue::from(n),
            Value::Boolean(b) => JsonValue::Bool(b),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Number(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Boolean(b) if b == other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}
