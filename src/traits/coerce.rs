use serde_json::Value as JsonValue;

#[cfg(test)]
use mockall::automock;

/// Field map carried by structured samples and their snapshots
pub type Fields = serde_json::Map<String, JsonValue>;

/// Trait for reducing a structured sample to a single scalar
///
/// The coercion is invoked against the frozen snapshot's fields, never the
/// caller's object. Its result is validated on every call, so an
/// implementation may return different JSON kinds over time; only numbers and
/// booleans are recorded.
///
/// Any `Fn(&Fields) -> serde_json::Value` closure implements this trait.
///
/// # Examples
///
/// ```rust
/// use resource_metric::traits::{Fields, ValueOf};
/// use serde_json::json;
///
/// let used = |fields: &Fields| json!(fields["used"].as_f64().unwrap_or(0.0) / 1024.0);
///
/// let mut fields = Fields::new();
/// fields.insert("used".into(), json!(2048));
/// assert_eq!(used.value_of(&fields), json!(2.0));
/// ```
#[cfg_attr(test, automock)]
pub trait ValueOf: Send + Sync {
    /// Reduce `fields` to a scalar
    fn value_of(&self, fields: &Fields) -> JsonValue;
}

impl<F> ValueOf for F
where
    F: Fn(&Fields) -> JsonValue + Send + Sync,
{
    fn value_of(&self, fields: &Fields) -> JsonValue {
        self(fields)
    }
}
