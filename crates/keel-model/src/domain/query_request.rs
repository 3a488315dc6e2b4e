use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{LIMIT_KEY, PER_PAGE_KEY, QueryValue};

/// Caller-supplied query parameters: page, page size, filter and sort criteria.
///
/// Serialized as a transparent JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryRequest(BTreeMap<String, QueryValue>);

impl QueryRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<QueryValue>
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Key presence, regardless of the value (a `null` value still counts).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns `true` if the key exists and its value is not blank.
    pub fn is_present(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(QueryValue::is_present)
    }

    /// Lenient integer view of a key; `None` only when the key is absent.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.0.get(key).map(QueryValue::to_int)
    }

    /// Truthiness of a flag key; absent keys are `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(QueryValue::to_bool)
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rewrite legacy request shapes in place.
    ///
    /// `limit` is copied into `per_page` when `limit` is present and `per_page` is blank or missing.
    /// Returns `true` if the request was changed.
    pub fn normalize_aliases(&mut self) -> bool {
        if !self.is_present(LIMIT_KEY) || self.is_present(PER_PAGE_KEY) {
            return false;
        }
        match self.0.get(LIMIT_KEY).cloned() {
            Some(limit) => {
                self.0.insert(PER_PAGE_KEY.to_string(), limit);
                true
            }
            None => false,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryRequest
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
