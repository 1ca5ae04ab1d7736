//! Key path normalization.
//!
//! A key path is given either as a dot-delimited string (`"a.b.c"`) or as a
//! list of keys (`["a", "b", "c"]`). Both normalize to an owned [`KeyPath`].

use serde_json::Value;

use crate::error::InvalidPathError;
use crate::types::{value_kind, KeyPath};

/// Anything that can be turned into a [`KeyPath`].
///
/// Statically typed strings and string lists always succeed. A
/// [`serde_json::Value`] is checked at runtime and fails with
/// [`InvalidPathError`] unless it is a string or an array of strings.
pub trait AsKeyPath {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError>;
}

impl AsKeyPath for str {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        Ok(split_dot_path(self))
    }
}

impl AsKeyPath for String {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        self.as_str().to_key_path()
    }
}

impl<S: AsRef<str>> AsKeyPath for [S] {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        Ok(self.iter().map(|step| step.as_ref().to_owned()).collect())
    }
}

impl<S: AsRef<str>> AsKeyPath for Vec<S> {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        self.as_slice().to_key_path()
    }
}

impl<S: AsRef<str>, const N: usize> AsKeyPath for [S; N] {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        self.as_slice().to_key_path()
    }
}

impl AsKeyPath for Value {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        match self {
            Value::String(s) => Ok(split_dot_path(s)),
            Value::Array(steps) => steps
                .iter()
                .map(|step| match step {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(InvalidPathError::NonStringElement {
                        found: value_kind(other),
                    }),
                })
                .collect(),
            other => Err(InvalidPathError::NotStringOrArray {
                found: value_kind(other),
            }),
        }
    }
}

impl<T: AsKeyPath + ?Sized> AsKeyPath for &T {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        (**self).to_key_path()
    }
}

/// Normalize a key path.
///
/// Dot strings are split on every `.` with no trimming, so `"a..b"` yields
/// `["a", "", "b"]`. Key lists are copied; the caller's list is never
/// touched.
///
/// # Example
///
/// ```
/// use deep_property::normalize;
/// use serde_json::json;
///
/// assert_eq!(normalize("a.b.c").unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(normalize("name").unwrap(), vec!["name"]);
/// assert_eq!(normalize(["a", "b"]).unwrap(), vec!["a", "b"]);
/// assert!(normalize(&json!(42)).is_err());
/// ```
pub fn normalize(path: impl AsKeyPath) -> Result<KeyPath, InvalidPathError> {
    path.to_key_path()
}

fn split_dot_path(path: &str) -> KeyPath {
    if !path.contains('.') {
        return vec![path.to_owned()];
    }
    path.split('.').map(str::to_owned).collect()
}

/// Join a key path back into dot notation, for logs and messages.
///
/// Not an inverse of [`normalize`] when a key itself contains a `.`.
pub fn format_key_path(path: &[String]) -> String {
    path.join(".")
}
