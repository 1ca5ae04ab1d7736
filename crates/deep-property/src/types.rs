//! Type definitions shared by the normalizer, the traversal engine and the
//! public operations.

use serde_json::{Map, Value};

/// A string-keyed object, the target of every operation.
pub type Record = Map<String, Value>;

/// A single key in a [`KeyPath`].
pub type PathStep = String;

/// A normalized key path: the ordered keys leading to a value.
pub type KeyPath = Vec<PathStep>;

/// The value reported for paths that do not resolve.
///
/// `Value::Null` doubles as the "deliberately empty" value a caller may
/// store, so [`crate::extract`] and [`crate::has`] are the only way to tell
/// a stored `null` apart from a missing key.
pub static ABSENT: Value = Value::Null;

/// Returns the runtime kind name of a JSON value, used in diagnostics.
///
/// # Example
///
/// ```
/// use deep_property::value_kind;
/// use serde_json::json;
///
/// assert_eq!(value_kind(&json!(null)), "null");
/// assert_eq!(value_kind(&json!([1, 2])), "array");
/// assert_eq!(value_kind(&json!({"a": 1})), "object");
/// ```
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a value can be descended into while walking a key path.
///
/// Only objects qualify; arrays and scalars block traversal.
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}
