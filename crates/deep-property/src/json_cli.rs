//! Logic behind the `deep-property` command-line tool.
//!
//! Kept separate from `src/bin` so it can be tested without spawning a
//! process.

use std::str::FromStr;

use serde_json::{json, Value};

use crate::error::InvalidPathError;
use crate::ops::{extract, get, has, set};
use crate::path::AsKeyPath;
use crate::types::{value_kind, KeyPath};

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    NotAnObject(&'static str),
    Path(InvalidPathError),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::NotAnObject(found) => write!(f, "document must be an object, got {found}"),
            CliError::Path(e) => write!(f, "{e}"),
            CliError::Usage(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<InvalidPathError> for CliError {
    fn from(e: InvalidPathError) -> Self {
        CliError::Path(e)
    }
}

/// The operation to run against the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Get,
    Has,
    Extract,
    Set,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Command::Get),
            "has" => Ok(Command::Has),
            "extract" => Ok(Command::Extract),
            "set" => Ok(Command::Set),
            other => Err(CliError::Usage(format!("Unknown command: {other}"))),
        }
    }
}

/// A key path as typed on the command line.
///
/// Arguments starting with `[` are read as a JSON array of keys, anything
/// else as a dot path.
#[derive(Debug, Clone, PartialEq)]
pub enum CliPath {
    Dot(String),
    Keys(Value),
}

impl CliPath {
    pub fn parse(arg: &str) -> Result<Self, CliError> {
        if arg.starts_with('[') {
            return Ok(CliPath::Keys(serde_json::from_str(arg)?));
        }
        Ok(CliPath::Dot(arg.to_owned()))
    }
}

impl AsKeyPath for CliPath {
    fn to_key_path(&self) -> Result<KeyPath, InvalidPathError> {
        match self {
            CliPath::Dot(path) => path.to_key_path(),
            CliPath::Keys(keys) => keys.to_key_path(),
        }
    }
}

/// Parse a `set` value: JSON if it parses, otherwise the raw string.
pub fn parse_value(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_owned()))
}

/// Run `command` on the JSON document `doc_json` and render the result.
///
/// - `get` prints the value (`null` when absent)
/// - `has` prints `true` or `false`
/// - `extract` prints `[exists, value]`
/// - `set` prints the updated document
pub fn run(
    command: Command,
    path: &str,
    value: Option<&str>,
    doc_json: &str,
) -> Result<String, CliError> {
    let path = CliPath::parse(path)?;
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let record = match &mut doc {
        Value::Object(map) => map,
        other => return Err(CliError::NotAnObject(value_kind(other))),
    };

    match command {
        Command::Get => Ok(serde_json::to_string_pretty(get(record, &path)?)?),
        Command::Has => Ok(has(record, &path)?.to_string()),
        Command::Extract => {
            let (exists, found) = extract(record, &path)?;
            Ok(serde_json::to_string(&json!([exists, found]))?)
        }
        Command::Set => {
            let raw = value.ok_or_else(|| CliError::Usage("set requires a value".to_string()))?;
            set(record, &path, parse_value(raw))?;
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}
