//! Opt-in diagnostics for paths that do not resolve.
//!
//! [`crate::get`], [`crate::has`] and [`crate::extract`] cannot tell a
//! missing key from a path blocked by a scalar. [`probe`] and [`try_set`]
//! report which one happened, and where.

use serde_json::Value;

use crate::error::{DeepPropertyError, InvalidPathError, TraversalError};
use crate::path::{normalize, AsKeyPath};
use crate::traverse::{assign, traverse};
use crate::types::Record;

/// Outcome of [`probe`].
#[derive(Debug, Clone, PartialEq)]
pub enum Probe<'a> {
    /// The final key exists; its value may be `null`.
    Found(&'a Value),
    /// The holding object was reached but has no such key.
    MissingKey { key: String },
    /// The holding object could not be reached.
    Unreachable(TraversalError),
}

impl<'a> Probe<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Probe::Found(_))
    }

    /// The found value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Probe::Found(value) => Some(*value),
            _ => None,
        }
    }
}

/// Resolve `path` and report exactly why it does not resolve, if it doesn't.
///
/// # Example
///
/// ```
/// use deep_property::{probe, Probe, TraversalError};
/// use serde_json::json;
///
/// let doc = json!({"traits": {"coat": "short"}});
/// let data = doc.as_object().unwrap();
///
/// assert_eq!(
///     probe(data, "traits.coat.length").unwrap(),
///     Probe::Unreachable(TraversalError::Blocked {
///         depth: 1,
///         segment: "coat".to_string(),
///         found: "string",
///     })
/// );
/// assert_eq!(
///     probe(data, "traits.weight").unwrap(),
///     Probe::MissingKey { key: "weight".to_string() }
/// );
/// ```
pub fn probe(record: &Record, path: impl AsKeyPath) -> Result<Probe<'_>, InvalidPathError> {
    let segments = normalize(path)?;
    let holder = match traverse(record, &segments) {
        Ok(holder) => holder,
        Err(err) => return Ok(Probe::Unreachable(err)),
    };
    let Some(key) = segments.last() else {
        return Ok(Probe::Unreachable(TraversalError::EmptyPath));
    };
    Ok(match holder.get(key) {
        Some(value) => Probe::Found(value),
        None => Probe::MissingKey { key: key.clone() },
    })
}

/// Like [`crate::set`], but a path that cannot be written is an error
/// instead of a silent no-op.
///
/// # Errors
///
/// - `DeepPropertyError::InvalidPath` if `path` is malformed
/// - `DeepPropertyError::Traversal` if an intermediate value is not an object
///   or the path is empty
pub fn try_set(
    record: &mut Record,
    path: impl AsKeyPath,
    value: impl Into<Value>,
) -> Result<&mut Record, DeepPropertyError> {
    let segments = normalize(path)?;
    assign(record, &segments, value.into())?;
    Ok(record)
}
