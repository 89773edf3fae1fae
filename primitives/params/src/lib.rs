#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Parameter Model
//!
//! A key-value container for remote procedure arguments. Keys are unique;
//! values are arbitrary JSON (scalars, identifier lists, nested mappings).
//! The container performs no validation of value shapes: the remote API
//! decides what is legal.
//!
//! Every read wrapper calls [`Params::ensure_output`] before dispatch so a
//! request without an explicit `output` selector returns all fields, while a
//! caller-supplied selector is left untouched.
//!
//! ```
//! use params::{Params, OUTPUT, OUTPUT_EXTEND};
//!
//! let mut params = Params::new().with("hostids", vec!["10084"]);
//! params.ensure_output();
//! assert_eq!(params.get_str(OUTPUT), Some(OUTPUT_EXTEND));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field-selection key understood by every `*.get` method.
pub const OUTPUT: &str = "output";
/// `output` value requesting every field of the object.
pub const OUTPUT_EXTEND: &str = "extend";
/// `output` value requesting identifiers only.
pub const OUTPUT_SHORTEN: &str = "shorten";

/// Remote procedure arguments.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self { Self::default() }

    /// Builder form of [`Params::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> { self.0.remove(key) }

    /// Sets `key` only if it is absent.
    ///
    /// Returns `true` when the default was inserted, `false` when an existing
    /// value was kept.
    pub fn ensure_default(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if self.0.contains_key(&key) {
            return false;
        }
        self.0.insert(key, value.into());
        true
    }

    /// Ensures `output` is present, defaulting it to `"extend"`.
    pub fn ensure_output(&mut self) -> bool { self.ensure_default(OUTPUT, OUTPUT_EXTEND) }

    /// String value under `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> { self.get(key).and_then(Value::as_str) }

    /// Integer value under `key`.
    ///
    /// Accepts both JSON numbers and numeric strings, since identifiers and
    /// codes are passed either way.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Boolean value under `key`, if present and a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> { self.get(key).and_then(Value::as_bool) }

    /// Identifier list under `key`.
    ///
    /// A single identifier is returned as a one-element list. Returns `None`
    /// when the key is absent or holds something other than identifiers.
    pub fn get_ids(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            Value::Array(items) => items.iter().map(id_string).collect(),
            other => id_string(other).map(|id| vec![id]),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns `true` if no key is set.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterates over the key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> { self.0.iter() }

    /// JSON object form, as sent on the wire.
    pub fn to_value(&self) -> Value { Value::Object(self.0.clone()) }

    /// Consumes the parameters into the underlying map.
    pub fn into_inner(self) -> Map<String, Value> { self.0 }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self { Self(map) }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self { Value::Object(params.0) }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
