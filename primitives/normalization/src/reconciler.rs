//! Cardinality reconciliation for mutating calls.
//!
//! `*.create` and `*.delete` answer with an object holding the affected
//! identifiers under a `<kind>ids` member. That member is a sequence of
//! identifiers in most API versions, but some versions return a mapping for
//! the same content. Both shapes are accepted here; callers never need to
//! know which one a server speaks.

use serde_json::{Map, Value};

use crate::error::{NormalizationError, Result, Shape};
use crate::field::Record;
use crate::normalizer::coerce_id;

/// An identifier collection in whichever shape the server used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdCollection<'a> {
    /// `["13", "14"]`
    Sequence(&'a [Value]),
    /// `{"0": "13", "1": "14"}` or `{"13": {...}, "14": {...}}`
    Mapping(&'a Map<String, Value>),
}

impl<'a> IdCollection<'a> {
    /// Classifies `raw`, failing with a shape mismatch for anything that is
    /// neither a sequence nor a mapping.
    pub fn from_value(context: &str, raw: &'a Value) -> Result<Self> {
        match raw {
            Value::Array(items) => Ok(IdCollection::Sequence(items)),
            Value::Object(map) => Ok(IdCollection::Mapping(map)),
            other => Err(NormalizationError::shape(context, "sequence or mapping", Shape::of(other))),
        }
    }

    /// Number of identifiers, without interpreting them.
    pub fn len(&self) -> usize {
        match self {
            IdCollection::Sequence(items) => items.len(),
            IdCollection::Mapping(map) => map.len(),
        }
    }

    /// Returns `true` if the collection holds no identifier.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// The identifiers in response order.
    ///
    /// For a mapping, the values are the identifiers when every value is a
    /// scalar identifier, otherwise the keys are. Entries are ordered by key
    /// when every key is a non-negative integer, and kept in map order
    /// otherwise.
    pub fn ids(&self, context: &str) -> Result<Vec<String>> {
        match self {
            IdCollection::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| coerce_id(&format!("{}[{}]", context, i), item))
                .collect(),
            IdCollection::Mapping(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                let positions: Option<Vec<u64>> =
                    entries.iter().map(|(key, _)| key.parse::<u64>().ok()).collect();
                if positions.is_some() {
                    entries.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
                }

                let values_are_ids = entries.iter().all(|(_, value)| is_scalar_id(value));
                if values_are_ids {
                    entries
                        .iter()
                        .map(|(key, value)| coerce_id(&format!("{}[{}]", context, key), value))
                        .collect()
                } else {
                    Ok(entries.into_iter().map(|(key, _)| key.clone()).collect())
                }
            }
        }
    }
}

fn is_scalar_id(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Number(n) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

/// Locates the `ids_key` member of a mutation result.
pub fn id_collection<'a>(result: &'a Value, ids_key: &str) -> Result<IdCollection<'a>> {
    let object = result.as_object().ok_or_else(|| {
        NormalizationError::shape(format!("{} result", ids_key), "mapping", Shape::of(result))
    })?;
    match object.get(ids_key) {
        Some(raw) => IdCollection::from_value(ids_key, raw),
        None => Err(NormalizationError::shape(ids_key, "sequence or mapping", Shape::Missing)),
    }
}

/// Checks that the result reports exactly `expected` identifiers.
///
/// Only the count is compared; the identifiers themselves are not read.
pub fn reconcile_count(expected: usize, result: &Value, ids_key: &str) -> Result<usize> {
    let actual = id_collection(result, ids_key)?.len();
    if actual != expected {
        return Err(NormalizationError::CountMismatch { expected, actual });
    }
    Ok(actual)
}

/// Checks the count and returns the reported identifiers in response order.
pub fn reconcile(expected: usize, result: &Value, ids_key: &str) -> Result<Vec<String>> {
    let collection = id_collection(result, ids_key)?;
    if collection.len() != expected {
        return Err(NormalizationError::CountMismatch { expected, actual: collection.len() });
    }
    collection.ids(ids_key)
}

/// Writes the identifiers returned by a create call back into `records`.
///
/// The N-th returned identifier goes to the N-th submitted record. That
/// positional correspondence is what the API promises; it cannot be checked
/// from the response. On any error no record is modified.
pub fn assign_created<T: Record>(records: &mut [T], result: &Value, ids_key: &str) -> Result<()> {
    let ids = reconcile(records.len(), result, ids_key)?;
    for (record, id) in records.iter_mut().zip(ids) {
        record.set_id(id);
    }
    Ok(())
}

/// Clears the identifiers of `records` after a delete call.
///
/// Every record is cleared once the count matches, whichever identifiers the
/// server echoed. On a count mismatch no record is modified.
pub fn clear_deleted<T: Record>(records: &mut [T], result: &Value, ids_key: &str) -> Result<()> {
    reconcile_count(records.len(), result, ids_key)?;
    records.iter_mut().for_each(T::clear_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sequence_ids() {
        let result = json!({"triggerids": ["13", 14, "15"]});
        let ids = reconcile(3, &result, "triggerids").expect("three ids");
        assert_eq!(ids, vec!["13", "14", "15"]);
    }

    #[test]
    fn test_mapping_values_ordered_by_position() {
        let result = json!({"triggerids": {"10": "k", "2": "c", "0": "a", "1": "b"}});
        let ids = reconcile(4, &result, "triggerids").expect("four ids");
        assert_eq!(ids, vec!["a", "b", "c", "k"]);
    }

    #[test]
    fn test_mapping_keys_when_values_are_objects() {
        let result = json!({"hostids": {"10084": {"hostid": "10084"}, "10085": {}}});
        let ids = reconcile(2, &result, "hostids").expect("two ids");
        assert_eq!(ids, vec!["10084", "10085"]);
    }

    #[test]
    fn test_count_mismatch_both_shapes() {
        let seq = json!({"triggerids": ["13", "14"]});
        let map = json!({"triggerids": {"0": "13", "1": "14"}});
        for result in [&seq, &map] {
            assert_eq!(reconcile_count(2, result, "triggerids").expect("match"), 2);
            assert_eq!(
                reconcile_count(3, result, "triggerids"),
                Err(NormalizationError::CountMismatch { expected: 3, actual: 2 })
            );
            assert_eq!(
                reconcile_count(1, result, "triggerids"),
                Err(NormalizationError::CountMismatch { expected: 1, actual: 2 })
            );
        }
    }

    #[test]
    fn test_count_ignores_identifier_content() {
        let result = json!({"triggerids": [null, {"x": 1}]});
        assert_eq!(reconcile_count(2, &result, "triggerids").expect("count only"), 2);
        assert!(matches!(
            reconcile(2, &result, "triggerids"),
            Err(NormalizationError::FieldCoercion { .. })
        ));
    }

    #[test]
    fn test_result_shape_errors() {
        assert!(matches!(
            reconcile_count(1, &json!(["13"]), "triggerids"),
            Err(NormalizationError::ShapeMismatch { found: Shape::Sequence, .. })
        ));
        assert!(matches!(
            reconcile_count(1, &json!({"itemids": ["1"]}), "triggerids"),
            Err(NormalizationError::ShapeMismatch { found: Shape::Missing, .. })
        ));
        assert!(matches!(
            reconcile_count(1, &json!({"triggerids": "13"}), "triggerids"),
            Err(NormalizationError::ShapeMismatch { found: Shape::String, .. })
        ));
    }

    #[test]
    fn test_empty_collections() {
        assert!(IdCollection::from_value("ids", &json!([])).expect("sequence").is_empty());
        assert!(IdCollection::from_value("ids", &json!({})).expect("mapping").is_empty());
        assert_eq!(reconcile(0, &json!({"ids": {}}), "ids").expect("empty"), Vec::<String>::new());
    }
}
