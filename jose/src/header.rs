//! Protected header model.
//!
//! Headers are heterogeneous (strings, numbers, booleans) and
//! order-significant: the verifying party sees the exact JSON byte
//! sequence through the base64url segment, so serialization must emit
//! keys in insertion order with no canonicalization.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single protected-header value.
///
/// Some boolean-looking claims (`x-gl-enc`, `is-digested`) are the
/// literal string `"true"` on the wire; the tagged variants keep that
/// distinction explicit instead of coercing.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// JSON string
    Str(String),
    /// JSON integer
    Num(i64),
    /// JSON boolean
    Bool(bool),
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl Serialize for HeaderValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Str(value) => serializer.serialize_str(value),
            Self::Num(value) => serializer.serialize_i64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
        }
    }
}

/// Insertion-ordered protected header map.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    entries: Vec<(String, HeaderValue)>,
}

impl HeaderMap {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a header value.
    ///
    /// Re-inserting an existing name replaces the value in place, so
    /// algorithm-mandated headers keep their position when a caller
    /// override merges in.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<HeaderValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Number of header entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON bytes in insertion order.
    pub(crate) fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
