//! # Samples
//!
//! A sample is one recorded data point: when it was taken, the scalar it
//! coerced to, and the input it came from.
//!
//! Inputs are either plain scalars or structured [`Object`]s. An object is a
//! bag of JSON fields plus an optional coercion method ([`ValueOf`]). When an
//! object is recorded it is frozen into a [`Snapshot`] first, and the scalar
//! is taken from the snapshot, so later edits to the caller's object change
//! neither the stored fields nor the stored value.
//!
//! ```rust
//! use resource_metric::prelude::*;
//! use serde_json::json;
//!
//! let mut disk = Object::new()
//!     .with_value_of(|fields: &Fields| fields["free"].clone())
//!     .with_field("free", 512)
//!     .with_field("mount", "/");
//!
//! let mut metric = Metric::new();
//! metric.record(&disk)?;
//! disk.set("mount", "/Volumes/Data");
//!
//! let recorded = metric.recorded()?;
//! assert_eq!(recorded[0].value, 512.0);
//! assert_eq!(recorded[0].raw.get("mount"), Some(&json!("/")));
//! # Ok::<(), resource_metric::Error>(())
//! ```

use std::{fmt, sync::Arc, time::SystemTime};

use serde_json::Value as JsonValue;

use crate::{
    core::types::Value,
    error::ValidationError,
    traits::{Fields, ValueOf},
};

/// A structured sample: JSON fields plus an optional coercion method
#[derive(Clone, Default)]
pub struct Object {
    fields: Fields,
    value_of: Option<Arc<dyn ValueOf>>,
}

impl Object {
    /// Creates an empty object without a coercion method
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the coercion method used when this object is recorded
    pub fn with_value_of<F>(mut self, value_of: F) -> Self
    where
        F: ValueOf + 'static,
    {
        self.set_value_of(value_of);
        self
    }

    /// Adds or replaces a field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set_value_of<F>(&mut self, value_of: F)
    where
        F: ValueOf + 'static,
    {
        self.value_of = Some(Arc::new(value_of));
    }

    /// Sets a field, returning the previous value if there was one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.fields.remove(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn has_value_of(&self) -> bool {
        self.value_of.is_some()
    }

    /// Freezes the object into a snapshot, failing if it has no coercion method
    fn freeze(self) -> Result<Snapshot, ValidationError> {
        let value_of = self.value_of.ok_or(ValidationError::MissingCoercion)?;
        Ok(Snapshot {
            fields: self.fields,
            value_of,
        })
    }
}

impl From<Fields> for Object {
    fn from(fields: Fields) -> Self {
        Self { fields, value_of: None }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("fields", &self.fields)
            .field("value_of", &self.value_of.is_some())
            .finish()
    }
}

/// Frozen copy of a recorded [`Object`]
///
/// There is no way to mutate a snapshot once it exists; recorders hand it out
/// behind an `Arc`.
pub struct Snapshot {
    fields: Fields,
    value_of: Arc<dyn ValueOf>,
}

impl Snapshot {
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Re-runs the captured coercion method against the frozen fields
    pub fn value_of(&self) -> JsonValue {
        self.value_of.value_of(&self.fields)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot").field("fields", &self.fields).finish_non_exhaustive()
    }
}

/// The original input of a sample
#[derive(Debug, Clone)]
pub enum Raw {
    /// A plain number or boolean; the raw input is the value itself
    Scalar(Value),
    /// A frozen structured input
    Object(Arc<Snapshot>),
}

impl Raw {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Raw::Object(snapshot) => Some(snapshot),
            Raw::Scalar(_) => None,
        }
    }

    /// Field lookup on a snapshot; always `None` for scalars
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.snapshot().and_then(|snapshot| snapshot.get(key))
    }
}

/// A single recorded data point
#[derive(Debug, Clone)]
pub struct Sample {
    /// When the sample was taken
    pub when: SystemTime,
    /// The coerced scalar
    pub value: Value,
    /// The input the value was derived from
    pub raw: Raw,
}

impl Sample {
    pub fn is_snapshot(&self) -> bool {
        matches!(self.raw, Raw::Object(_))
    }
}

/// Anything `record` accepts
///
/// Typed numbers and booleans arrive as `Value` and are stored as given,
/// including NaN and the infinities. `Scalar` holds dynamic JSON so that
/// strings, nulls and arrays can be handed to a recorder and rejected there
/// with a typed error.
#[derive(Debug, Clone)]
pub enum Input {
    Value(Value),
    Scalar(JsonValue),
    Object(Object),
}

impl Input {
    /// Validates the input and derives the stored value and raw form
    pub(crate) fn coerce(self) -> Result<(Value, Raw), ValidationError> {
        match self {
            Input::Object(object) => {
                let snapshot = object.freeze()?;
                let value = Value::try_from(&snapshot.value_of())?;
                Ok((value, Raw::Object(Arc::new(snapshot))))
            }
            Input::Value(value) => Ok((value, Raw::Scalar(value))),
            Input::Scalar(JsonValue::Object(fields)) => Input::Object(Object::from(fields)).coerce(),
            Input::Scalar(scalar) => {
                let value = Value::try_from(&scalar)?;
                Ok((value, Raw::Scalar(value)))
            }
        }
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Value(value)
    }
}

impl From<JsonValue> for Input {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(fields) => Input::Object(Object::from(fields)),
            scalar => Input::Scalar(scalar),
        }
    }
}

impl From<Object> for Input {
    fn from(object: Object) -> Self {
        Input::Object(object)
    }
}

impl From<&Object> for Input {
    fn from(object: &Object) -> Self {
        Input::Object(object.clone())
    }
}

macro_rules! input_from {
    ($variant:ident => $($t:ty),*) => {
        $(
            impl From<$t> for Input {
                fn from(v: $t) -> Self {
                    Input::$variant(v.into())
                }
            }
        )*
    };
}

input_from!(Value => bool, f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
input_from!(Scalar => &str, String);
