use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute-level validation messages collected by a form.
///
/// Serialized as a transparent `{ "attribute": ["message", ...] }` object so it can be returned
/// from an API as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record a message against an attribute.
    pub fn add<A, M>(&mut self, attribute: A, message: M)
    where
        A: Into<String>,
        M: Into<String>,
    {
        self.0
            .entry(attribute.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for one attribute, empty if none.
    pub fn get(&self, attribute: &str) -> &[String] {
        self.0.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all attributes.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Messages prefixed with their attribute name, e.g. `"name can't be blank"`.
    pub fn full_messages(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|(attr, msgs)| msgs.iter().map(move |m| format!("{attr} {m}")))
            .collect()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
