use thiserror::Error;

/// A key path argument that cannot be normalized.
///
/// `found` names the runtime kind of the offending value (`null`,
/// `boolean`, `number`, `string`, `array` or `object`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPathError {
    #[error("key path must be an array or a string, got {found}")]
    NotStringOrArray { found: &'static str },
    #[error("key path array may only contain strings, got {found}")]
    NonStringElement { found: &'static str },
}

/// Why a key path could not be walked.
///
/// The public operations swallow these and report absence; only the
/// diagnostic entry points in [`crate::diagnose`] hand them to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("NOT_FOUND: missing key {segment:?} at depth {depth}")]
    Missing { depth: usize, segment: String },
    #[error("NOT_CONTAINER: key {segment:?} at depth {depth} holds a {found}")]
    Blocked {
        depth: usize,
        segment: String,
        found: &'static str,
    },
    #[error("EMPTY_PATH")]
    EmptyPath,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeepPropertyError {
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}
