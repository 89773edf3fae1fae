//! Ordered read results.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use crate::error::DuplicateKeyError;
use crate::field::Record;

/// Records in the order the server returned them.
///
/// That order is not guaranteed to be stable between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T>(Vec<T>);

impl<T> Default for Collection<T> {
    fn default() -> Self { Self(Vec::new()) }
}

impl<T> Collection<T> {
    /// Wraps records.
    pub fn new(records: Vec<T>) -> Self { Self(records) }

    /// Unwraps the records.
    pub fn into_vec(self) -> Vec<T> { self.0 }
}

impl<T: Record> Collection<T> {
    /// Identifiers of the records, in order.
    pub fn ids(&self) -> Vec<String> { self.0.iter().map(|r| r.id().to_string()).collect() }

    /// Converts to a mapping keyed by identifier, reporting a repeated key.
    pub fn try_by_id(self) -> Result<BTreeMap<String, T>, DuplicateKeyError> {
        let mut map = BTreeMap::new();
        for record in self.0 {
            match map.entry(record.id().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(DuplicateKeyError { key: entry.key().clone() });
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }
        Ok(map)
    }

    /// Converts to a mapping keyed by identifier.
    ///
    /// # Panics
    ///
    /// Panics if two records share an identifier. The API never returns
    /// duplicates in one response, so a duplicate means the server broke
    /// its contract.
    pub fn by_id(self) -> BTreeMap<String, T> {
        match self.try_by_id() {
            Ok(map) => map,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] { &self.0 }
}

impl<T> DerefMut for Collection<T> {
    fn deref_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self { Self(records) }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
