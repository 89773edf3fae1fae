//! Table-driven decoding and encoding of records.

use serde_json::{Map, Value};

use crate::collection::Collection;
use crate::error::{NormalizationError, Result, SemanticType, Shape};
use crate::field::{Accessor, Record};
use crate::reconciler::IdCollection;

/// Which fields [`encode_record`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Every field in the table.
    Full,
    /// Writable fields only, with `omit_empty` fields dropped while empty.
    /// This is the payload shape for `*.create`.
    Writable,
}

/// Normalizes a `*.get` result into a typed collection.
///
/// `raw` must be a sequence of mappings; anything else is a
/// [`NormalizationError::ShapeMismatch`]. The first field that cannot be
/// coerced aborts the whole call.
pub fn normalize<T: Record>(raw: &Value) -> Result<Collection<T>> {
    let items = raw.as_array().ok_or_else(|| {
        NormalizationError::shape(format!("{} result", T::KIND), "sequence", Shape::of(raw))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(NormalizationError::shape(
                    format!("{} result[{}]", T::KIND, i),
                    "mapping",
                    Shape::of(item),
                ));
            }
            decode_record(item, "")
        })
        .collect()
}

/// Decodes one mapping into a record.
///
/// `path` prefixes field names in errors (empty at the top level).
pub fn decode_record<T: Record>(raw: &Value, path: &str) -> Result<T> {
    let map = raw.as_object().ok_or_else(|| {
        let context = if path.is_empty() { T::KIND.to_string() } else { path.to_string() };
        NormalizationError::shape(context, "mapping", Shape::of(raw))
    })?;

    let mut record = T::default();
    for def in T::fields() {
        let value = match map.get(def.wire) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        let field = field_path(path, def.wire);
        match &def.access {
            Accessor::Text { set, .. } => set(&mut record, coerce_text(&field, value)?),
            Accessor::Identifier { set, .. } => set(&mut record, coerce_id(&field, value)?),
            Accessor::Integer { set, .. } => set(&mut record, coerce_integer(&field, value)?),
            Accessor::Code { set, .. } => set(&mut record, coerce_code(&field, value)?),
            Accessor::IdList { key, set, .. } => {
                set(&mut record, decode_id_list(&field, *key, value)?)
            }
            Accessor::Nested { decode, .. } => decode(&mut record, value, &field)?,
        }
    }
    Ok(record)
}

/// Decodes a nested record collection.
///
/// Accepts a sequence of mappings or a mapping whose values are the records
/// (the shape produced when the server preserves keys).
pub fn decode_nested<R: Record>(raw: &Value, path: &str) -> Result<Vec<R>> {
    match raw {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_record(item, &format!("{}[{}]", path, i)))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| decode_record(item, &format!("{}[{}]", path, key)))
            .collect(),
        other => Err(NormalizationError::shape(path, "sequence or mapping", Shape::of(other))),
    }
}

/// Encodes a record into its wire mapping.
pub fn encode_record<T: Record>(record: &T, encoding: Encoding) -> Map<String, Value> {
    let writable_only = encoding == Encoding::Writable;
    let mut map = Map::new();
    for def in T::fields() {
        if writable_only && !def.writable {
            continue;
        }
        let value = match &def.access {
            Accessor::Text { get, .. } | Accessor::Identifier { get, .. } => {
                let text = get(record);
                if writable_only && def.omit_empty && text.is_empty() {
                    continue;
                }
                Value::String(text.to_string())
            }
            Accessor::Integer { get, .. } => Value::from(get(record)),
            Accessor::Code { get, .. } => Value::from(get(record)),
            Accessor::IdList { key, wrap, get, .. } => {
                let ids = get(record);
                if writable_only && def.omit_empty && ids.is_empty() {
                    continue;
                }
                encode_id_list(if *wrap { *key } else { None }, ids)
            }
            Accessor::Nested { encode, .. } => {
                let nested = encode(record, writable_only);
                let empty = nested.as_array().is_some_and(Vec::is_empty);
                if writable_only && def.omit_empty && empty {
                    continue;
                }
                nested
            }
        };
        map.insert(def.wire.to_string(), value);
    }
    map
}

/// Encodes nested records as a sequence.
pub fn encode_nested<R: Record>(records: &[R], writable_only: bool) -> Value {
    let encoding = if writable_only { Encoding::Writable } else { Encoding::Full };
    Value::Array(records.iter().map(|r| Value::Object(encode_record(r, encoding))).collect())
}

/// Reads a text field. Numbers render to their decimal form.
pub fn coerce_text(field: &str, raw: &Value) -> Result<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(NormalizationError::coercion(field, SemanticType::Text, other)),
    }
}

/// Reads an identifier: a string or an integer.
pub fn coerce_id(field: &str, raw: &Value) -> Result<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(NormalizationError::coercion(field, SemanticType::Identifier, other)),
    }
}

/// Reads an integer from a JSON integer or a numeric string.
pub fn coerce_integer(field: &str, raw: &Value) -> Result<i64> {
    let parsed = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| NormalizationError::coercion(field, SemanticType::Integer, raw))
}

fn coerce_code(field: &str, raw: &Value) -> Result<i32> {
    coerce_integer(field, raw)
        .ok()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| NormalizationError::coercion(field, SemanticType::Code, raw))
}

fn decode_id_list(field: &str, key: Option<&str>, raw: &Value) -> Result<Vec<String>> {
    let collection = IdCollection::from_value(field, raw)?;
    match (key, collection) {
        (Some(key), IdCollection::Sequence(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let elem = format!("{}[{}]", field, i);
                match item {
                    Value::Object(obj) => match obj.get(key) {
                        Some(id) => coerce_id(&elem, id),
                        None => Err(NormalizationError::coercion(elem, SemanticType::Identifier, item)),
                    },
                    other => coerce_id(&elem, other),
                }
            })
            .collect(),
        (_, collection) => collection.ids(field),
    }
}

fn encode_id_list(key: Option<&str>, ids: &[String]) -> Value {
    let items = ids.iter().map(|id| match key {
        Some(key) => {
            let mut obj = Map::new();
            obj.insert(key.to_string(), Value::String(id.clone()));
            Value::Object(obj)
        }
        None => Value::String(id.clone()),
    });
    Value::Array(items.collect())
}

fn field_path(path: &str, wire: &str) -> String {
    if path.is_empty() {
        wire.to_string()
    } else {
        format!("{}.{}", path, wire)
    }
}
