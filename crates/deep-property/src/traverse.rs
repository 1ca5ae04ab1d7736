//! Walking a record along a key path.
//!
//! Both walkers consume every key except the last and return the object
//! that should hold it. Callers read, write or probe the final key on that
//! object themselves. A single-key path resolves to the record itself.

use serde_json::Value;

use crate::error::TraversalError;
use crate::types::{is_container, value_kind, Record};

/// Resolve the object holding the final key of `segments`, read-only.
///
/// # Errors
///
/// - `TraversalError::EmptyPath` if `segments` is empty
/// - `TraversalError::Missing` if an intermediate key does not exist
/// - `TraversalError::Blocked` if an intermediate value is not an object
///
/// # Example
///
/// ```
/// use deep_property::traverse;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": {"c": 1}}});
/// let record = doc.as_object().unwrap();
/// let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let holder = traverse(record, &path).unwrap();
/// assert_eq!(holder.get("c"), Some(&json!(1)));
/// ```
pub fn traverse<'a>(
    record: &'a Record,
    segments: &[String],
) -> Result<&'a Record, TraversalError> {
    let (_, parents) = segments.split_last().ok_or(TraversalError::EmptyPath)?;

    let mut position = record;
    for (depth, step) in parents.iter().enumerate() {
        position = match position.get(step) {
            Some(Value::Object(map)) => map,
            Some(other) => return Err(blocked(depth, step, other)),
            None => {
                return Err(TraversalError::Missing {
                    depth,
                    segment: step.clone(),
                })
            }
        };
    }
    Ok(position)
}

/// Resolve the object holding the final key of `segments`, mutably.
///
/// With `create_missing`, absent intermediate keys are filled with empty
/// objects on the way down. An existing value that is not an object is
/// never replaced, even in create mode.
pub fn traverse_mut<'a>(
    record: &'a mut Record,
    segments: &[String],
    create_missing: bool,
) -> Result<&'a mut Record, TraversalError> {
    let (_, parents) = segments.split_last().ok_or(TraversalError::EmptyPath)?;

    let mut position = record;
    for (depth, step) in parents.iter().enumerate() {
        if !position.contains_key(step) {
            if !create_missing {
                return Err(TraversalError::Missing {
                    depth,
                    segment: step.clone(),
                });
            }
            tracing::trace!(depth, segment = %step, "creating intermediate object");
            position.insert(step.clone(), Value::Object(Record::new()));
        }
        position = match position.get_mut(step) {
            Some(Value::Object(map)) => map,
            Some(other) => return Err(blocked(depth, step, other)),
            None => {
                return Err(TraversalError::Missing {
                    depth,
                    segment: step.clone(),
                })
            }
        };
    }
    Ok(position)
}

/// Read the value at `segments`.
///
/// `Ok(None)` means the holding object was reached but has no such key.
pub fn lookup<'a>(
    record: &'a Record,
    segments: &[String],
) -> Result<Option<&'a Value>, TraversalError> {
    let holder = traverse(record, segments)?;
    let key = segments.last().ok_or(TraversalError::EmptyPath)?;
    Ok(holder.get(key))
}

/// Write `value` at `segments`, creating intermediate objects.
pub fn assign(
    record: &mut Record,
    segments: &[String],
    value: Value,
) -> Result<(), TraversalError> {
    let key = segments.last().ok_or(TraversalError::EmptyPath)?;
    let holder = traverse_mut(record, segments, true)?;
    holder.insert(key.clone(), value);
    Ok(())
}

fn blocked(depth: usize, step: &str, found: &Value) -> TraversalError {
    debug_assert!(!is_container(found));
    TraversalError::Blocked {
        depth,
        segment: step.to_owned(),
        found: value_kind(found),
    }
}
