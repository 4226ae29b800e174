//! Record: one entry in a relation
//!
//! A `Record` maps field names to [`Value`]s. Records are schema-less —
//! two records in the same relation may carry entirely different fields —
//! and are replaced whole on write: there is no partial-field update at
//! the storage layer. Callers read, mutate the returned copy, and write
//! the full record back.
//!
//! Fields are kept in a `BTreeMap` so iteration, `Debug`, and serialized
//! output have a deterministic field order.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field-name → value mapping, addressed within a relation by key
///
/// # Example
///
/// ```
/// use conceptdb_core::{Record, Value};
///
/// let record = Record::new()
///     .with("name", "base")
///     .with("fields", Value::from_iter(["id", "name"]))
///     .with("parent", Value::Null);
///
/// assert_eq!(record.get("name").and_then(Value::as_str), Some("base"));
/// assert!(record.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field value, returning the previous value if any
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Remove a field, returning its value if present
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Check whether a field is present
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Iterate over field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Typed field accessors
    // ------------------------------------------------------------------

    /// Get a string field
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Get an integer field
    pub fn get_int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_int)
    }

    /// Get a boolean field
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Get a list field
    pub fn get_list(&self, field: &str) -> Option<&[Value]> {
        self.get(field).and_then(Value::as_list)
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Record { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Build a `Record` from a JSON object
///
/// Fails on non-object JSON; the handlers only ever store objects.
impl TryFrom<serde_json::Value> for Record {
    type Error = crate::error::Error;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(v) {
            Value::Map(record) => Ok(record),
            other => Err(crate::error::Error::InvalidRecord(format!(
                "expected a JSON object, got {}",
                other.type_name()
            ))),
        }
    }
}
