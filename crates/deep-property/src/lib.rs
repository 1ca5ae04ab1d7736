//! Deep property access for JSON objects.
//!
//! Read, write and probe fields buried several levels deep in a
//! [`serde_json::Map`] without hand-written `null` checks. Paths are either
//! dot-delimited strings (`"traits.coat.length"`) or lists of keys
//! (`["traits", "coat", "length"]`).
//!
//! # Example
//!
//! ```
//! use deep_property::{extract, get, has, set, Record};
//! use serde_json::json;
//!
//! let mut data = Record::new();
//! set(&mut data, "name", "Pembroke Welsh Corgi").unwrap();
//! set(&mut data, "traits.coat.length", "medium").unwrap();
//! set(&mut data, ["traits", "coat", "thickness"], "thick").unwrap();
//! set(&mut data, "traits.lifeSpan", json!([12, 15])).unwrap();
//!
//! assert_eq!(get(&data, ["traits", "coat", "length"]).unwrap(), &json!("medium"));
//! assert!(has(&data, "traits.coat.thickness").unwrap());
//! assert!(!has(&data, "traits.weight").unwrap());
//! assert_eq!(extract(&data, "traits.coat.length").unwrap(), (true, &json!("medium")));
//! assert_eq!(extract(&data, "traits.weight").unwrap(), (false, &json!(null)));
//! ```
//!
//! Paths that cannot be walked are not errors: `set` leaves the record
//! untouched and the readers report absence. Use [`probe`] or [`try_set`]
//! to find out why a path did not resolve.

pub mod diagnose;
pub mod error;
pub mod json_cli;
pub mod logging;
pub mod ops;
pub mod path;
pub mod traverse;
pub mod types;

pub use diagnose::{probe, try_set, Probe};
pub use error::{DeepPropertyError, InvalidPathError, TraversalError};
pub use ops::{extract, get, has, set};
pub use path::{format_key_path, normalize, AsKeyPath};
pub use traverse::{lookup, traverse, traverse_mut};
pub use types::{is_container, value_kind, KeyPath, PathStep, Record, ABSENT};

pub use ops::extract as extract_deep_property;
pub use ops::get as get_deep_property;
pub use ops::has as has_deep_property;
pub use ops::set as set_deep_property;
