//! The four public operations: [`set`], [`get`], [`has`] and [`extract`].
//!
//! Each one normalizes its key path first and fails only when the path
//! itself is malformed. A path that cannot be walked is never an error:
//! `set` leaves the record alone and the readers report absence.

use serde_json::Value;

use crate::error::{InvalidPathError, TraversalError};
use crate::path::{format_key_path, normalize, AsKeyPath};
use crate::traverse::{assign, lookup};
use crate::types::{Record, ABSENT};

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// Whatever was stored at the final key is replaced. If an intermediate key
/// holds something other than an object, nothing is written. Either way the
/// same record is handed back.
///
/// # Example
///
/// ```
/// use deep_property::{get, set, Record};
/// use serde_json::json;
///
/// let mut data = Record::new();
/// set(&mut data, "traits.coat.length", "medium").unwrap();
/// set(&mut data, ["traits", "coat", "thickness"], "thick").unwrap();
/// assert_eq!(get(&data, "traits.coat").unwrap(), &json!({
///     "length": "medium",
///     "thickness": "thick",
/// }));
/// ```
pub fn set(
    record: &mut Record,
    path: impl AsKeyPath,
    value: impl Into<Value>,
) -> Result<&mut Record, InvalidPathError> {
    let segments = normalize(path)?;
    if let Err(err) = assign(record, &segments, value.into()) {
        swallowed("set", &segments, &err);
    }
    Ok(record)
}

/// Probe `path`, returning whether the final key exists and its value.
///
/// A key explicitly holding `null` yields `(true, &Value::Null)`; a missing
/// key yields `(false, &Value::Null)`.
///
/// # Example
///
/// ```
/// use deep_property::{extract, Record};
/// use serde_json::json;
///
/// let doc = json!({"traits": {"coat": {"length": "medium"}, "weight": null}});
/// let data: &Record = doc.as_object().unwrap();
/// assert_eq!(extract(data, "traits.coat.length").unwrap(), (true, &json!("medium")));
/// assert_eq!(extract(data, "traits.weight").unwrap(), (true, &json!(null)));
/// assert_eq!(extract(data, "traits.height").unwrap(), (false, &json!(null)));
/// ```
pub fn extract(
    record: &Record,
    path: impl AsKeyPath,
) -> Result<(bool, &Value), InvalidPathError> {
    let segments = normalize(path)?;
    let found = match lookup(record, &segments) {
        Ok(Some(value)) => (true, value),
        Ok(None) => (false, &ABSENT),
        Err(err) => {
            swallowed("extract", &segments, &err);
            (false, &ABSENT)
        }
    };
    Ok(found)
}

/// Read the value at `path`, or `&Value::Null` when it does not resolve.
pub fn get(record: &Record, path: impl AsKeyPath) -> Result<&Value, InvalidPathError> {
    extract(record, path).map(|(_, value)| value)
}

/// Whether the final key of `path` exists, even if it holds `null`.
pub fn has(record: &Record, path: impl AsKeyPath) -> Result<bool, InvalidPathError> {
    extract(record, path).map(|(exists, _)| exists)
}

fn swallowed(op: &'static str, segments: &[String], err: &TraversalError) {
    tracing::debug!(
        op,
        path = %format_key_path(segments),
        error = %err,
        "path not reachable"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_set_creates_nested_objects() {
        let mut data = Record::new();
        set(&mut data, "a.b.c", 1).unwrap();
        assert_eq!(Value::Object(data), json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_set_single_key() {
        let mut data = Record::new();
        set(&mut data, "name", "Pembroke Welsh Corgi").unwrap();
        assert_eq!(Value::Object(data), json!({"name": "Pembroke Welsh Corgi"}));
    }

    #[test]
    fn test_set_returns_same_record() {
        let mut data = Record::new();
        let ptr: *const Record = &data;
        let returned = set(&mut data, ["one", "two", "three"], "some value").unwrap();
        assert!(std::ptr::eq(&*returned, ptr));
    }

    #[test]
    fn test_set_replaces_object_with_scalar_and_back() {
        let mut data = record(json!({"a": {"b": {"c": 1}}}));
        set(&mut data, "a.b", "flat").unwrap();
        assert_eq!(get(&data, "a.b").unwrap(), &json!("flat"));
        set(&mut data, "a.b", json!({"c": 2})).unwrap();
        assert_eq!(get(&data, "a.b.c").unwrap(), &json!(2));
    }

    #[test]
    fn test_set_blocked_is_noop() {
        let mut data = record(json!({"a": "leaf"}));
        let before = data.clone();
        set(&mut data, "a.b", 1).unwrap();
        assert_eq!(data, before);
        assert!(!has(&data, "a.b").unwrap());
        assert_eq!(get(&data, "a.b").unwrap(), &Value::Null);
    }

    #[test]
    fn test_set_empty_key_path_is_noop() {
        let mut data = record(json!({"a": 1}));
        set(&mut data, Vec::<String>::new(), 2).unwrap();
        assert_eq!(Value::Object(data), json!({"a": 1}));
    }

    #[test]
    fn test_set_invalid_path_errors() {
        let mut data = Record::new();
        let err = set(&mut data, &json!(7), 1).unwrap_err();
        assert_eq!(err, InvalidPathError::NotStringOrArray { found: "number" });
        assert!(data.is_empty());
    }

    #[test]
    fn test_extract_missing_and_null() {
        let data = record(json!({"a": {"b": null}}));
        assert_eq!(extract(&data, "a.b").unwrap(), (true, &Value::Null));
        assert_eq!(extract(&data, "a.c").unwrap(), (false, &Value::Null));
        assert_eq!(extract(&data, "x.y.z").unwrap(), (false, &Value::Null));
    }

    #[test]
    fn test_readers_are_side_effect_free() {
        let data = record(json!({"a": {}}));
        for _ in 0..3 {
            assert!(!has(&data, "a.b.c").unwrap());
            assert_eq!(get(&data, "a.b.c").unwrap(), &Value::Null);
        }
        assert_eq!(Value::Object(data), json!({"a": {}}));
    }

    #[test]
    fn test_double_dot_path_is_absent() {
        let mut data = record(json!({"a": {"b": 1}}));
        assert!(!has(&data, "a..b").unwrap());
        set(&mut data, "a..b", 2).unwrap();
        assert_eq!(get(&data, ["a", "", "b"]).unwrap(), &json!(2));
        assert_eq!(get(&data, "a.b").unwrap(), &json!(1));
    }

    #[test]
    fn test_readers_reject_invalid_paths() {
        let data = Record::new();
        assert!(get(&data, &json!(null)).is_err());
        assert!(has(&data, &json!(["a", false])).is_err());
        assert!(extract(&data, &json!({})).is_err());
    }
}
