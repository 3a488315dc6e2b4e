use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value carried by a [`QueryRequest`](crate::QueryRequest).
///
/// Mirrors the shapes that arrive in request parameters: scalars, lists and nested maps.
/// Serialized untagged, so `{"page": "3", "tags": ["a"]}` deserializes without wrappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<QueryValue>),
    Map(BTreeMap<String, QueryValue>),
}

impl QueryValue {
    /// An empty map value.
    #[inline]
    pub fn empty_map() -> Self {
        QueryValue::Map(BTreeMap::new())
    }

    /// Build a map value from key–value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        QueryValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns `true` for values that carry no usable content.
    ///
    /// Null, `false`, whitespace-only strings and empty collections are blank.
    /// Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            QueryValue::Null => true,
            QueryValue::Bool(b) => !b,
            QueryValue::Int(_) | QueryValue::Float(_) => false,
            QueryValue::Str(s) => s.trim().is_empty(),
            QueryValue::List(items) => items.is_empty(),
            QueryValue::Map(entries) => entries.is_empty(),
        }
    }

    /// Negation of [`QueryValue::is_blank`].
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_blank()
    }

    /// Lenient integer conversion.
    ///
    /// - integers are returned as-is, floats are truncated;
    /// - strings yield their leading integer (`" 12abc"` → 12, `"1_000"` → 1000, `"abc"` → 0);
    ///   a single `_` is accepted between digits;
    /// - every other shape yields 0.
    pub fn to_int(&self) -> i64 {
        match self {
            QueryValue::Int(n) => *n,
            QueryValue::Float(f) => *f as i64,
            QueryValue::Str(s) => leading_int(s),
            QueryValue::Null | QueryValue::Bool(_) | QueryValue::List(_) | QueryValue::Map(_) => 0,
        }
    }

    /// Strict integer view: only [`QueryValue::Int`] matches.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            QueryValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<String, QueryValue>> {
        match self {
            QueryValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Truthiness of a request flag such as `?archived=true`.
    ///
    /// Accepts `true`, non-zero numbers and the strings `true|t|yes|y|1` (case-insensitive).
    pub fn to_bool(&self) -> bool {
        match self {
            QueryValue::Bool(b) => *b,
            QueryValue::Int(n) => *n != 0,
            QueryValue::Float(f) => *f != 0.0,
            QueryValue::Str(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "t" | "yes" | "y" | "1"
            ),
            QueryValue::Null | QueryValue::List(_) | QueryValue::Map(_) => false,
        }
    }
}

fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let bytes = digits.as_bytes();
    let mut acc: i64 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => acc = acc.saturating_mul(10).saturating_add(i64::from(b - b'0')),
            b'_' if i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {}
            _ => break,
        }
    }
    if negative { -acc } else { acc }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<i32> for QueryValue {
    fn from(n: i32) -> Self {
        QueryValue::Int(i64::from(n))
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f64> for QueryValue {
    fn from(f: f64) -> Self {
        QueryValue::Float(f)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(items: Vec<T>) -> Self {
        QueryValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, QueryValue>> for QueryValue {
    fn from(entries: BTreeMap<String, QueryValue>) -> Self {
        QueryValue::Map(entries)
    }
}
